//! Prompt templates for the debate flow

use crate::persona::entities::Persona;
use crate::persona::roster::PersonaRoster;

/// Placeholder used when there is no prior conversation to show
const NO_CONTEXT: &str = "(no previous conversation)";

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt locking a model into its persona
    pub fn persona_system(persona: &Persona, word_limit: u32) -> String {
        let name = persona.display_name();
        let other = persona.forbidden_impersonation();

        let mut prompt = format!(
            "You are {name}, {role}. You must ONLY speak as {name} and never respond as {other}.\n\n\
             Your characteristics and debate style should reflect:\n",
            role = persona.role,
        );
        for trait_line in persona.characteristics {
            prompt.push_str(&format!("- {}\n", trait_line));
        }

        let mut never = format!("NEVER speak as {other} or mention \"As {other}...\"");
        for topic in persona.forbidden_topics {
            never.push_str(&format!(" or about {}", topic));
        }

        prompt.push_str(&format!(
            "\nRules:\n\
             1. {never}\n\
             2. Always maintain {name}'s perspective and personality\n\
             3. Keep response under {word_limit} words\n\
             4. {hint}",
            hint = persona.reference_hint,
        ));
        prompt
    }

    /// User prompt for one debate turn
    pub fn persona_turn(persona: &Persona, context: &str, opponent_text: &str) -> String {
        let context = if context.trim().is_empty() {
            NO_CONTEXT
        } else {
            context
        };
        format!(
            "Previous conversation:\n{}\n\nOpponent's points: {}\n\nRespond as {}, addressing the opponent's points:",
            context,
            opponent_text,
            persona.display_name()
        )
    }

    /// System prompt for the periodic summarizer
    pub fn summary_system() -> &'static str {
        "You are a neutral debate summarizer. You report what each side argued without taking sides."
    }

    /// User prompt for summarizing one block of the transcript
    pub fn summary_prompt(roster: &PersonaRoster, conversation_text: &str) -> String {
        let first = roster.first();
        let second = roster.second();

        let mut prompt = format!(
            "Summarize the key points made by both {} and {} in this recent exchange.\n\
             Focus on their main arguments and evidence presented. Keep the summary concise (100-150 words).\n\n\
             Consider their different approaches:\n",
            first.display_name(),
            second.display_name()
        );
        for persona in roster.iter() {
            prompt.push_str(&format!(
                "- {}: {}\n",
                persona.display_name(),
                persona.summary_focus
            ));
        }
        prompt.push_str(&format!(
            "\nConversation:\n{}\n\nProvide a balanced summary highlighting the strongest points from both sides.",
            conversation_text
        ));
        prompt
    }

    /// System prompt for the judge
    pub fn judge_system() -> &'static str {
        "You are an impartial AI judge. You weigh arguments on their merits and always declare a single winner."
    }

    /// User prompt for the final verdict. `debate_transcript` may be empty.
    pub fn judge_prompt(roster: &PersonaRoster, debate_transcript: &str) -> String {
        let first = roster.first();
        let second = roster.second();
        format!(
            r#"Analyze a debate between {a} ({a_org}) and {b} ({b_org}) on who has contributed more to technological advancement in society.
Below are summaries of the key exchanges throughout the debate. Your role is to:
1. Analyze the progression of arguments through these summaries
2. Evaluate the strength of their arguments based on:
   - Innovation and technological advancement
   - Impact on society and human progress
   - Vision and execution of ideas
   - Long-term influence on multiple industries
3. Declare a winner with a detailed justification

Debate Summaries:
{debate_transcript}

Format your response as:
1. Analysis of key arguments
2. Evaluation of both sides
3. Final verdict, on its own line as "Winner: <name>", followed by the justification

Provide a balanced and thorough analysis before declaring the winner."#,
            a = first.display_name(),
            a_org = first.affiliation,
            b = second.display_name(),
            b_org = second.affiliation,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Model;

    #[test]
    fn test_persona_system_locks_identity() {
        let musk = Persona::musk(Model::default_musk());
        let prompt = PromptTemplate::persona_system(&musk, 100);
        assert!(prompt.starts_with("You are Elon Musk, CEO of Tesla and SpaceX."));
        assert!(prompt.contains("NEVER speak as Steve Jobs"));
        assert!(prompt.contains("or about Apple"));
        assert!(prompt.contains("under 100 words"));
        assert!(prompt.contains("- Emphasis on first-principles thinking"));
    }

    #[test]
    fn test_persona_turn_without_context_is_still_valid() {
        let jobs = Persona::jobs(Model::default_jobs());
        let prompt = PromptTemplate::persona_turn(&jobs, "", "Who has contributed more?");
        assert!(prompt.contains(NO_CONTEXT));
        assert!(prompt.contains("Opponent's points: Who has contributed more?"));
        assert!(prompt.ends_with("Respond as Steve Jobs, addressing the opponent's points:"));
    }

    #[test]
    fn test_summary_prompt_mentions_both_focuses() {
        let roster = PersonaRoster::default();
        let prompt = PromptTemplate::summary_prompt(&roster, "Steve Jobs: J1\nElon Musk: E1");
        assert!(prompt.contains("integrated ecosystems"));
        assert!(prompt.contains("technological boundaries"));
        assert!(prompt.contains("Steve Jobs: J1\nElon Musk: E1"));
        assert!(prompt.contains("100-150 words"));
    }

    #[test]
    fn test_judge_prompt_embeds_rubric_and_transcript() {
        let roster = PersonaRoster::default();
        let prompt = PromptTemplate::judge_prompt(&roster, "S1\nS2");
        assert!(prompt.contains("Steve Jobs (Apple) and Elon Musk (Tesla/SpaceX)"));
        assert!(prompt.contains("Long-term influence on multiple industries"));
        assert!(prompt.contains("Debate Summaries:\nS1\nS2\n"));
    }

    #[test]
    fn test_judge_prompt_with_empty_log() {
        let prompt = PromptTemplate::judge_prompt(&PersonaRoster::default(), "");
        assert!(prompt.contains("Debate Summaries:\n\n"));
    }
}
