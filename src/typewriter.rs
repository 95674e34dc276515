// src/typewriter.rs

use crate::client::SharedClient;
use log::debug;
use std::time::Duration;
use tokio::time::sleep;

/// Reveals a complete string one character at a time.
///
/// Holds its own position, so each call to [`Typewriter::next_char`] is one
/// step of the animation. The generation number ties the animation to the
/// client that started it; a newer generation retires this one.
#[derive(Debug, Clone)]
pub struct Typewriter {
    entry: usize,
    chars: Vec<char>,
    index: usize,
    generation: u64,
}

/// Result of advancing the current animation by one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterStep {
    Revealed(char),
    Finished,
    /// A newer animation replaced the one being driven.
    Superseded,
}

impl Typewriter {
    pub fn new(entry: usize, text: &str, generation: u64) -> Self {
        Self {
            entry,
            chars: text.chars().collect(),
            index: 0,
            generation,
        }
    }

    /// Index of the log entry being revealed.
    pub fn entry(&self) -> usize {
        self.entry
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn next_char(&mut self) -> Option<char> {
        let ch = self.chars.get(self.index).copied()?;
        self.index += 1;
        Some(ch)
    }

    pub fn revealed(&self) -> usize {
        self.index
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.chars.len()
    }
}

/// Drives the animation of `generation` until it finishes or is superseded,
/// sleeping `delay` after every reveal. Returns the number of reveals made.
pub async fn animate(client: SharedClient, generation: u64, delay: Duration) -> usize {
    let mut reveals = 0;
    loop {
        let step = client.lock().await.advance_typewriter(generation);
        match step {
            TypewriterStep::Revealed(_) => {
                reveals += 1;
                sleep(delay).await;
            }
            TypewriterStep::Finished => {
                debug!("Typewriter {} finished after {} reveals", generation, reveals);
                break;
            }
            TypewriterStep::Superseded => {
                debug!("Typewriter {} superseded after {} reveals", generation, reveals);
                break;
            }
        }
    }
    reveals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_through_every_char() {
        let mut tw = Typewriter::new(0, "Hi there", 1);
        let mut out = String::new();
        while let Some(ch) = tw.next_char() {
            out.push(ch);
        }
        assert_eq!(out, "Hi there");
        assert_eq!(tw.revealed(), 8);
        assert!(tw.is_finished());
        assert_eq!(tw.next_char(), None);
    }

    #[test]
    fn counts_unicode_scalars() {
        let mut tw = Typewriter::new(2, "Phong là ai?", 7);
        let mut steps = 0;
        while tw.next_char().is_some() {
            steps += 1;
        }
        assert_eq!(steps, "Phong là ai?".chars().count());
        assert_eq!(tw.entry(), 2);
        assert_eq!(tw.generation(), 7);
    }

    #[test]
    fn empty_text_is_finished_immediately() {
        let mut tw = Typewriter::new(0, "", 1);
        assert!(tw.is_finished());
        assert_eq!(tw.next_char(), None);
    }
}
