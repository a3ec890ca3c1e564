//! Property-based tests for transcript construction

use super::*;
use crate::conversation::ConversationLog;
use crate::llm::Role;
use crate::profile::EducationLevel;
use proptest::prelude::*;

// ============================================================
// Generators
// ============================================================

/// Sender flag plus short message text. Texts stay well below the
/// instruction length so prefix checks cannot collide.
fn arb_history() -> impl Strategy<Value = Vec<(bool, String)>> {
    prop::collection::vec((any::<bool>(), "[A-Za-z0-9 ?.,]{0,24}"), 0..8)
}

fn arb_utterance() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ?.,]{0,32}"
}

fn arb_profile() -> impl Strategy<Value = UserProfile> {
    ("[A-Za-z]{1,12}", any::<bool>()).prop_map(|(name, tenth)| UserProfile {
        name,
        education: if tenth {
            EducationLevel::Tenth
        } else {
            EducationLevel::Twelfth
        },
    })
}

fn build_log(entries: &[(bool, String)]) -> ConversationLog {
    let mut log = ConversationLog::new();
    for (is_user, text) in entries {
        if *is_user {
            log.append_user(text.clone());
        } else {
            log.append_assistant(text.clone());
        }
    }
    log
}

// ============================================================
// Properties
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Exactly one turn carries the fused instruction, and it is the
    /// first user-role turn of the transcript.
    #[test]
    fn prop_exactly_one_turn_carries_instruction(
        history in arb_history(),
        utterance in arb_utterance(),
        profile in arb_profile(),
    ) {
        let log = build_log(&history);
        let turns = build_transcript(&utterance, log.messages(), &profile, Language::English);
        let instruction = system_instruction(&profile, Language::English);

        let fused: Vec<usize> = turns
            .iter()
            .enumerate()
            .filter(|(_, t)| t.parts[0].text.starts_with(&instruction))
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(fused.len(), 1);

        let first_user = turns.iter().position(|t| t.role == Role::User);
        prop_assert_eq!(Some(fused[0]), first_user);
    }

    /// The transcript is one turn per history message plus a final user
    /// turn carrying the current utterance.
    #[test]
    fn prop_final_turn_is_current_utterance(
        history in arb_history(),
        utterance in arb_utterance(),
        profile in arb_profile(),
    ) {
        let log = build_log(&history);
        let turns = build_transcript(&utterance, log.messages(), &profile, Language::English);

        prop_assert_eq!(turns.len(), history.len() + 1);
        let last = turns.last().unwrap();
        prop_assert_eq!(last.role, Role::User);
        prop_assert!(last.parts[0].text.ends_with(&utterance));
    }

    /// History survives in order: roles map user/assistant with no third
    /// role, and every turn except the fused one keeps its text verbatim.
    #[test]
    fn prop_history_survives_verbatim_with_roles_mapped(
        history in arb_history(),
        utterance in arb_utterance(),
        profile in arb_profile(),
    ) {
        let log = build_log(&history);
        let turns = build_transcript(&utterance, log.messages(), &profile, Language::Hindi);
        let instruction = system_instruction(&profile, Language::Hindi);
        let mut seen_user = false;

        for (message, turn) in log.messages().iter().zip(&turns) {
            match message.sender {
                Sender::User if !seen_user => {
                    seen_user = true;
                    prop_assert_eq!(turn.role, Role::User);
                    prop_assert_eq!(
                        turn.parts[0].text.clone(),
                        format!("{instruction}\n\n{}", message.text)
                    );
                }
                Sender::User => {
                    prop_assert_eq!(turn.role, Role::User);
                    prop_assert_eq!(&turn.parts[0].text, &message.text);
                }
                Sender::Assistant => {
                    prop_assert_eq!(turn.role, Role::Assistant);
                    prop_assert_eq!(&turn.parts[0].text, &message.text);
                }
            }
        }
    }
}
