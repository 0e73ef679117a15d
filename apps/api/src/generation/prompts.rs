//! Prompts for the drafting endpoints.

pub fn suggest_content_prompt(job_title: &str, years_experience: &str) -> String {
    format!(
        "Generate a resume for a {job_title} with {years_experience} years of experience. \
         Return in this format:\n\
         - Education: [One concise entry]\n\
         - Experience: [3 bullet points]\n\
         - Skills: [5 concise skills]"
    )
}

pub fn enhance_section_prompt(section: &str, content: &str, job_title: Option<&str>) -> String {
    let context = job_title
        .map(|title| format!(" for a {title}"))
        .unwrap_or_default();
    format!(
        "Rewrite this {section} section{context} to be concise, professional, and ATS-friendly:\n\
         {content}\n\
         Return the enhanced version only, no extra text."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enhance_prompt_includes_job_title_context() {
        let prompt = enhance_section_prompt("skills", "python", Some("Data Engineer"));
        assert!(prompt.contains("for a Data Engineer"));
    }

    #[test]
    fn test_enhance_prompt_without_job_title() {
        let prompt = enhance_section_prompt("skills", "python", None);
        assert!(!prompt.contains("for a "));
    }
}
