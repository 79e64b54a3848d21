use std::io::{self, BufRead, Write};

use log::info;

use crate::engine::apply::apply_move;
use crate::engine::score::winner;
use crate::error::{Error, Result};
use crate::rules::Rules;
use crate::solver::{choose_move, Strategy};
use crate::state::GameState;
use crate::types::{Move, Owner};

/// Who picks the moves for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Controller {
    /// Moves come from the operator through [`Game::step`]'s input callback.
    Human,
    Engine(Strategy),
}

/// A running game: current state, the two controllers and the moves played.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    p1: Controller,
    p2: Controller,
    history: Vec<Move>,
}

impl Game {
    pub fn new(rules: Rules, p1: Controller, p2: Controller) -> Result<Self> {
        Ok(Self {
            state: GameState::new(rules)?,
            p1,
            p2,
            history: Vec::new(),
        })
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    #[inline]
    pub fn winner(&self) -> Option<Owner> {
        winner(&self.state)
    }

    #[inline]
    pub fn controller(&self, owner: Owner) -> Controller {
        match owner {
            Owner::P1 => self.p1,
            Owner::P2 => self.p2,
        }
    }

    /// Play `mv` for the side to move. On error the game is unchanged.
    pub fn play(&mut self, mv: Move) -> Result<()> {
        let next = apply_move(&self.state, mv)?;
        info!("[game] {} claims {mv}", self.state.next);
        self.state = next;
        self.history.push(mv);
        Ok(())
    }

    /// Let the side to move pick and play one move. `human` is asked only when
    /// that side is [`Controller::Human`]. Returns `Ok(None)` once the game is over.
    pub fn step<F>(&mut self, mut human: F) -> Result<Option<Move>>
    where
        F: FnMut(&GameState) -> Result<Move>,
    {
        if self.is_over() {
            return Ok(None);
        }
        let mv = match self.controller(self.state.next) {
            Controller::Human => human(&self.state)?,
            Controller::Engine(strategy) => match choose_move(strategy, &self.state) {
                Some(mv) => mv,
                None => return Ok(None),
            },
        };
        self.play(mv)?;
        Ok(Some(mv))
    }
}

/// Prompt on `output` and read one move token from `input`.
/// Closed input is an error; any other line parses through [`Move::parse`].
pub fn prompt_move<R, W>(input: &mut R, output: &mut W, state: &GameState) -> Result<Move>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{} to move, enter a cell letter: ", state.next)
        .and_then(|()| output.flush())
        .map_err(|e| Error::io("write the move prompt", e))?;
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| Error::io("read a move", e))?;
    if read == 0 {
        return Err(Error::io(
            "read a move",
            io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"),
        ));
    }
    Ok(Move::parse(&line))
}
