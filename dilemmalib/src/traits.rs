//! Унифицированные трэйты: стратегия поиска и чтение/запись на основе std::io::{BufRead, Write}.

use crate::{error::Result, model::InputData, solution::Solution};
use std::io::{BufRead, Write};

pub trait Strategy {
    /// `Ok(None)` — подходящего подмножества нет, это не ошибка.
    fn find_solution(&self, input: &InputData) -> Result<Option<Solution>>;
}

pub trait ReadInput {
    fn read<R: BufRead>(r: R) -> Result<InputData>;
}

pub trait WriteSolution {
    fn write<W: Write>(w: W, solution: Option<&Solution>) -> Result<()>;
}

pub trait Format: ReadInput + WriteSolution {}
impl<T: ReadInput + WriteSolution> Format for T {}
