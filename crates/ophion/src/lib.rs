#![doc = include_str!("../../../README.md")]

mod error;
mod handle;
mod interp;
mod session;
mod translate;
mod value;

pub use crate::{
    error::ForeignError, handle::Handle, interp::Interpreter, session::Session, value::HostValue,
};
