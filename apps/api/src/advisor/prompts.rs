/// Prompt for a short learning brief on one missing skill.
/// `{skill}` is replaced with the skill name.
pub const SKILL_BRIEF_PROMPT_TEMPLATE: &str = "\
Provide concise information about the technical skill \"{skill}\" for someone who wants to learn it:
1. Brief explanation of what {skill} is (1-2 sentences)
2. Why it's important in tech/industry (1 sentence)
3. Resources to learn it (1-2 top resources)
4. Approximate time to learn basics (1 sentence)

Keep the entire response under 150 words.";

pub fn skill_brief_prompt(skill: &str) -> String {
    SKILL_BRIEF_PROMPT_TEMPLATE.replace("{skill}", skill)
}
