use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum CounterIntent {
    Increment,
    Decrement,
    Reset,
}

impl Intent for CounterIntent {}
