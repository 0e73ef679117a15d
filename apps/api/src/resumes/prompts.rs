//! Prompts for the résumé analysis endpoints.
//!
//! The job-match flow asks for more suggestions than the ATS-only flow; the
//! wording is otherwise stable and the feedback formatter depends on the
//! exact `**...**` markers requested here.

/// Canned roast for a résumé with no extractable text.
pub const BLANK_RESUME_ROAST: &str =
    "A blank resume? Wow, you're really letting your *nothingness* shine!";

pub fn structure_feedback_prompt(resume_text: &str, has_job_description: bool) -> String {
    if has_job_description {
        format!(
            "Analyze the structure of this resume:\n{resume_text}\n\
             Comment on missing sections like Experience, Education, or Skills in 1-2 concise sentences. \
             Then, provide 5-7 actionable suggestions as bullet points starting with '- '."
        )
    } else {
        format!(
            "Analyze the structure of this resume:\n{resume_text}\n\
             Comment on missing sections like Experience, Education, or Skills in 2-3 concise sentences. \
             Then, provide 3-5 actionable suggestions as bullet points starting with '- '."
        )
    }
}

pub fn readability_feedback_prompt(
    resume_text: &str,
    avg_sentence_length: f64,
    has_job_description: bool,
) -> String {
    let suggestions = if has_job_description {
        "Provide feedback on clarity and sentence structure in 1-2 concise sentences. \
         Then, provide 5-7 actionable suggestions as bullet points starting with '- '."
    } else {
        "Provide feedback on clarity and sentence structure in 2-3 concise sentences. \
         Then, provide 3-5 actionable suggestions as bullet points starting with '- '."
    };
    format!(
        "Analyze the readability of this resume:\n{resume_text}\n\
         Average sentence length is {avg_sentence_length:.1} words. {suggestions}"
    )
}

pub fn match_feedback_prompt(resume_text: &str, job_description: &str) -> String {
    format!(
        "You are an expert resume reviewer. Compare this resume:\n{resume_text}\n\
         with this job description:\n{job_description}. \
         Provide feedback in the following format:\n\
         **Match Quality and Suggestions for Improvement:**\n\
         [Explain the match quality in 1-2 concise sentences. Then, provide 5-7 actionable suggestions as bullet points starting with '- '.]\n\
         **Overall Quality, Clarity, and Structure:**\n\
         [Analyze the resume's overall quality, clarity, and structure in 1-2 concise sentences.]"
    )
}

pub fn ats_feedback_prompt(resume_text: &str) -> String {
    format!(
        "You are an expert resume reviewer. Analyze this resume:\n{resume_text}\n\
         for ATS compatibility and overall quality. Provide feedback in the following format:\n\
         **ATS Readiness:**\n\
         [Explain the ATS compatibility in 2-3 concise sentences.]\n\
         **Suggestions:**\n\
         [Provide 3-5 actionable suggestions to improve structure, keyword usage, and readability as bullet points starting with '- '.]"
    )
}

pub fn roast_prompt(
    resume_text: &str,
    missing_sections: &[&str],
    avg_sentence_length: f64,
    tone_instruction: &str,
) -> String {
    let missing = if missing_sections.is_empty() {
        "None".to_string()
    } else {
        missing_sections.join(", ")
    };
    format!(
        "You're a stand-up comedian roasting this resume:\n{resume_text}\n\
         Missing sections: {missing}.\n\
         Average sentence length is {avg_sentence_length:.1} words.\n\
         {tone_instruction}\n\
         Provide a concise roast in EXACTLY the following format (use the exact section headers and prefixes):\n\
         - **Structure**: Roast the layout, formatting, and missing sections in 2-3 sentences.\n\
         - **Readability**: Roast the clarity, jargon, and verbosity in 2-3 sentences.\n\
         - **Projects**: Roast the projects section in 2-3 sentences.\n\
         - **Skills**: Roast the technical skills in 2-3 sentences.\n\
         - **Overall Vibe**: Summarize the overall impression sarcastically in 2-3 sentences.\n\
         Ensure each section is short and punchy. Do not deviate from the specified format, even if a section is missing in the resume."
    )
}

/// Tone instruction per roast level; unknown levels fall back to spicy.
pub fn roast_tone_instruction(level: &str) -> &'static str {
    match level.to_lowercase().as_str() {
        "mild" => "Provide a gentle, lighthearted roast that's encouraging but still funny.",
        "burnt" => "Provide a savage, no-holds-barred roast that's still funny but very critical.",
        _ => "Provide a moderately sarcastic roast that's humorous but not too harsh.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_prompt_carries_formatter_markers() {
        let prompt = match_feedback_prompt("resume", "jd");
        assert!(prompt.contains("**Match Quality and Suggestions for Improvement:**"));
        assert!(prompt.contains("**Overall Quality, Clarity, and Structure:**"));
    }

    #[test]
    fn test_ats_prompt_carries_formatter_markers() {
        let prompt = ats_feedback_prompt("resume");
        assert!(prompt.contains("**ATS Readiness:**"));
        assert!(prompt.contains("**Suggestions:**"));
    }

    #[test]
    fn test_unknown_roast_level_defaults_to_spicy() {
        assert_eq!(
            roast_tone_instruction("volcanic"),
            roast_tone_instruction("spicy")
        );
        assert_ne!(
            roast_tone_instruction("mild"),
            roast_tone_instruction("burnt")
        );
    }
}
