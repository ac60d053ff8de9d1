//! Income tax and weekly investment calculator.
//!
//! [`engine`] holds the calculations: the tax tables, medicare levy and net
//! salary, and the four-weekly investment projection. Everything there is a
//! pure function over plain records. [`format`] renders results as text and
//! [`cmd`] drives the command line and the interactive session.

pub mod cmd;
pub mod engine;
pub mod format;
