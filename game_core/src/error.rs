use std::fmt;

/// Failure to interpret a mode or difficulty identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    UnknownPlayerMode(String),
    UnknownRoundMode(String),
    UnknownDifficulty(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPlayerMode(s) => write!(f, "unknown player mode: {s:?}"),
            Self::UnknownRoundMode(s) => write!(f, "unknown round mode: {s:?}"),
            Self::UnknownDifficulty(s) => write!(f, "unknown difficulty: {s:?}"),
        }
    }
}

impl std::error::Error for ParseError {}
