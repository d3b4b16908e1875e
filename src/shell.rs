//! Line-oriented quiz loop. Reads guesses from any `BufRead` and writes
//! prompts and feedback to any `Write`, so the binary drives it with
//! stdin/stdout and tests drive it with in-memory buffers.

use std::io::{self, BufRead, Write};

use rand::Rng;

use crate::persistence::PersistenceStrategy;
use crate::trainer::{LastResult, Trainer};

enum Input {
    Line(String),
    Eof,
}

pub struct Session<'a, P: ?Sized, G> {
    trainer: Trainer,
    store: &'a P,
    rng: G,
}

impl<'a, P, G> Session<'a, P, G>
where
    P: PersistenceStrategy + ?Sized,
    G: Rng,
{
    pub fn new(trainer: Trainer, store: &'a P, rng: G) -> Self {
        Self {
            trainer,
            store,
            rng,
        }
    }

    pub fn trainer(&self) -> &Trainer {
        &self.trainer
    }

    pub fn into_trainer(self) -> Trainer {
        self.trainer
    }

    /// Runs until the user confirms exit or input ends. Progress is saved
    /// after every round and once more on exit.
    pub fn run<I: BufRead, O: Write>(&mut self, mut input: I, mut output: O) -> io::Result<()> {
        loop {
            self.show_current_pair(&mut output)?;

            let guess = match read_line(&mut input)? {
                Input::Eof => return self.exit(&mut output),
                Input::Line(line) => line,
            };

            if guess.trim().is_empty() {
                write!(output, "Do you want to exit the trainer? (y/n): ")?;
                output.flush()?;
                match read_line(&mut input)? {
                    Input::Eof => return self.exit(&mut output),
                    Input::Line(answer) if is_yes(&answer) => return self.exit(&mut output),
                    Input::Line(_) => {}
                }
            } else {
                self.play_round(&guess, &mut output)?;
            }

            self.show_statistics(&mut output)?;
            self.save();
        }
    }

    fn play_round<O: Write>(&mut self, guess: &str, output: &mut O) -> io::Result<()> {
        match self.trainer.guess_word(guess) {
            Ok(true) => writeln!(output, "Correct! Well done!"),
            Ok(false) => writeln!(output, "Incorrect. Try again!"),
            Err(err) => writeln!(output, "{err}"),
        }
    }

    fn show_current_pair<O: Write>(&self, output: &mut O) -> io::Result<()> {
        let pair = self.trainer.current_pair();
        writeln!(output)?;
        writeln!(output, "Can you guess the word for the following picture?")?;
        writeln!(output, "  {}", pair.image_url())?;
        write!(output, "Enter your guess: ")?;
        output.flush()
    }

    /// Prints the running totals. A correct answer moves on to a new pair
    /// only after its result has been shown.
    fn show_statistics<O: Write>(&mut self, output: &mut O) -> io::Result<()> {
        writeln!(output, "Statistics:")?;
        writeln!(output, "{}", self.trainer.statistics())?;
        writeln!(output, "{}", self.trainer.last_result().as_str())?;

        if self.trainer.last_result() == LastResult::Correct {
            self.trainer.select_random_pair(&mut self.rng);
        }
        Ok(())
    }

    fn save(&self) {
        if let Err(err) = self.trainer.persist(self.store) {
            tracing::warn!(error = %err, "failed to save progress, continuing in memory");
        }
    }

    fn exit<O: Write>(&mut self, output: &mut O) -> io::Result<()> {
        self.save();
        writeln!(output)?;
        writeln!(output, "Trainer exited. Goodbye!")?;
        output.flush()
    }
}

fn read_line<I: BufRead>(input: &mut I) -> io::Result<Input> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(Input::Eof);
    }
    Ok(Input::Line(line))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
