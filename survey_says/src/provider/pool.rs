//! Authored questions used whenever remote generation is unavailable.

use log::debug;
use rand::{Rng, seq::IndexedRandom};
use std::collections::HashSet;

use super::errors::PoolError;
use crate::game::{
    constants::{ANSWER_SLOTS, SLOT_POINTS},
    entities::{Answer, AnswerId, Question},
};

/// Prompt plus answers in popularity order.
type PoolEntry = (&'static str, [&'static str; ANSWER_SLOTS]);

const BUILTIN: [PoolEntry; 12] = [
    (
        "Name the first thing you do after waking up.",
        ["Make coffee", "Go to the bathroom", "Check my phone", "Brush my teeth"],
    ),
    (
        "Name something a sauna can't do without.",
        ["A stove", "Water ladle", "Birch whisk", "Heat"],
    ),
    (
        "Name the most annoying thing on public transport.",
        ["Bad smells", "Delays", "Loud phone calls", "Crowding"],
    ),
    (
        "What do you say when you step on a stranger's foot?",
        ["Oops", "Sorry", "Are you okay?", "*Mumble*"],
    ),
    (
        "Name something you can't go to a summer cottage without.",
        ["Sausages", "Beer", "Mosquito repellent", "Swimsuit"],
    ),
    (
        "Name the most popular pizza topping.",
        ["Ham", "Pineapple", "Blue cheese", "Pepperoni"],
    ),
    (
        "What do you do when you see your neighbour in the stairwell?",
        ["Avoid eye contact", "Quietly say hi", "Wait until they leave", "Stare at the floor"],
    ),
    (
        "Name the best way to spend a Friday night.",
        ["Sauna", "Couch and TV", "Bar or party", "Sleeping"],
    ),
    (
        "Name the most common excuse for being late.",
        ["Overslept", "Bus was late", "Traffic", "Hangover"],
    ),
    (
        "Name something found in every student's fridge.",
        ["The light", "Ketchup", "Beer", "Old leftovers"],
    ),
    (
        "Name something you couldn't live without.",
        ["Phone", "Coffee", "Family and friends", "Oxygen"],
    ),
    (
        "What do you do when the internet goes down?",
        ["Swear", "Restart the router", "Switch to mobile data", "Wait"],
    ),
];

fn entry_to_question(index: usize, (prompt, answers): &PoolEntry) -> Question {
    let answers = std::array::from_fn(|slot| {
        Answer::new(
            AnswerId::new(&format!("pool-{}-{}", index + 1, slot + 1)),
            answers[slot],
            SLOT_POINTS[slot],
        )
    });
    Question::with_distinct_ids(prompt, answers)
}

/// Fixed set of questions. Every pick hands out a clone, so revealing
/// answers on a returned question never touches the pool.
#[derive(Clone, Debug)]
pub struct FallbackPool {
    questions: Vec<Question>,
}

impl Default for FallbackPool {
    fn default() -> Self {
        Self {
            questions: BUILTIN
                .iter()
                .enumerate()
                .map(|(index, entry)| entry_to_question(index, entry))
                .collect(),
        }
    }
}

impl FallbackPool {
    /// A pool of custom questions.
    ///
    /// # Errors
    ///
    /// If `questions` is empty.
    pub fn new(questions: Vec<Question>) -> Result<Self, PoolError> {
        if questions.is_empty() {
            return Err(PoolError::Empty);
        }
        Ok(Self { questions })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn prompts(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(|question| question.text.as_str())
    }

    /// Picks uniformly among questions whose prompt is not in `excluded`.
    /// Once everything has been used the whole pool is back in play.
    pub fn pick<R: Rng + ?Sized>(&self, excluded: &[String], rng: &mut R) -> Question {
        let excluded: HashSet<&str> = excluded.iter().map(String::as_str).collect();
        let fresh: Vec<&Question> = self
            .questions
            .iter()
            .filter(|question| !excluded.contains(question.text.as_str()))
            .collect();

        let choice = if fresh.is_empty() {
            debug!("Fallback pool exhausted, repeating questions");
            self.questions.choose(rng)
        } else {
            fresh.choose(rng).copied()
        };
        // Construction guarantees at least one question.
        choice.cloned().unwrap_or_else(|| entry_to_question(0, &BUILTIN[0]))
    }

    /// [`FallbackPool::pick`] with the thread-local generator.
    pub fn pick_random(&self, excluded: &[String]) -> Question {
        self.pick(excluded, &mut rand::rng())
    }
}
