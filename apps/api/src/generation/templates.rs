// Fixed letter text. Placeholders in `{braces}` are substituted by the composer.

pub const GREETING: &str = "Dear Hiring Manager,";

pub const SIGN_OFF: &str = "Sincerely,";

/// n ≥ 5 matching skills. Placeholders: {job_title}, {years}, {skills}.
pub const OPENING_STRONG_TEMPLATE: &str = "I am writing to express my strong interest in the {job_title} position. With over {years} years of experience in {skills}, I am confident that my technical expertise and proven track record of delivering innovative solutions align perfectly with your requirements.";

/// 3 ≤ n < 5 matching skills. Placeholders: {job_title}, {skills}.
pub const OPENING_MODERATE_TEMPLATE: &str = "I am excited to apply for the {job_title} role. My experience with {skills} combined with my passion for creating impactful solutions makes me an ideal candidate for this opportunity.";

/// n < 3 matching skills. Placeholder: {job_title}.
pub const OPENING_GENERIC_TEMPLATE: &str = "I am writing to express my interest in the {job_title} position. While I may not have experience with all the specific technologies mentioned, I am a quick learner with a strong foundation in software development and a proven ability to adapt to new technologies and deliver results.";

pub const EXPERIENCE_GENERIC: &str = "Throughout my career, I have demonstrated a strong ability to write clean, maintainable code and collaborate effectively with cross-functional teams. My experience includes working on various projects that have helped me develop strong problem-solving skills and the ability to work effectively in fast-paced environments.";

/// Placeholder: {relevant_experience}.
pub const EXPERIENCE_RELEVANT_TEMPLATE: &str = "In my previous roles, I have consistently delivered high-quality solutions through technical expertise and collaborative problem-solving. {relevant_experience} This experience has prepared me well for the challenges and opportunities in this role.";

/// Placeholder: {summary}.
pub const EXPERIENCE_SUMMARY_TEMPLATE: &str = "My professional experience includes {summary}... This background has equipped me with the skills and mindset needed to contribute effectively to your team and drive meaningful results.";

pub const SKILLS_GENERIC: &str = "I am committed to continuous learning and am confident in my ability to quickly become proficient with any new technologies or frameworks required for this role. My strong analytical skills, attention to detail, and collaborative approach will enable me to contribute effectively to your development team.";

/// Placeholder: {skills}.
pub const SKILLS_MATCHED_TEMPLATE: &str = "My technical skills include {skills}, which directly align with the requirements for this position. I am particularly experienced in applying these technologies to solve real-world problems and deliver user-focused solutions that drive business value. I am also comfortable learning new technologies quickly and adapting to evolving project requirements, which I believe will be valuable in your dynamic environment.";

pub const CLOSING: &str = "I am excited about the opportunity to contribute to your organization and would welcome the chance to discuss how my skills and experience can benefit your team. I am particularly drawn to your mission and believe my background would be a great fit for your organization.

I am available for an interview at your convenience and look forward to learning more about this opportunity. Thank you for considering my application.";
