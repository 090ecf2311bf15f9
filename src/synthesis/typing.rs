use std::sync::Arc;

use super::random::RandomSource;

/// One planned keyboard event with the pause to hold after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypingAction {
    /// Type one character of the requested text.
    EmitChar { c: char, delay_ms: u64 },
    /// Type a wrong character that will be corrected.
    EmitTypo { c: char, delay_ms: u64 },
    /// Backspace over the preceding typo.
    Correct { delay_ms: u64 },
}

/// Plans keystroke sequences with variable pacing and occasional
/// typo-and-correct mistakes.
pub struct TypingPlanner {
    random: Arc<dyn RandomSource>,
}

impl TypingPlanner {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// Plan the keystrokes for `text`. Every input character yields exactly
    /// one `EmitChar`, in order; typo/correct pairs are never orphaned.
    pub fn plan_typing(&self, text: &str) -> Vec<TypingAction> {
        let chars: Vec<char> = text.chars().collect();
        let mut actions = Vec::with_capacity(chars.len());

        for &c in &chars {
            // 5% chance to slip in a typo first. The wrong character is
            // sampled from the whole string, not the neighborhood of `c`.
            if self.random.uniform_int(0, 100) < 5 {
                let j = self.random.uniform_int(0, chars.len() as i64 - 1) as usize;
                actions.push(TypingAction::EmitTypo {
                    c: chars[j],
                    delay_ms: self.random.uniform_int(100, 300) as u64,
                });
                actions.push(TypingAction::Correct { delay_ms: 0 });
            }

            actions.push(TypingAction::EmitChar {
                c,
                delay_ms: self.random.uniform_int(50, 300) as u64,
            });
        }

        actions
    }
}
