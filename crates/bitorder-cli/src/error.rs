use std::{error::Error, fmt, panic};

use bitorder::ConvertError;
use snafu::{GenerateImplicitData, Snafu};

use crate::term::{Color, WithFg};

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Location(&'static panic::Location<'static>);

impl Default for Location {
    #[track_caller]
    fn default() -> Self {
        Self(panic::Location::caller())
    }
}

impl GenerateImplicitData for Location {
    #[track_caller]
    fn generate() -> Self {
        Self::default()
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Snafu)]
#[snafu(whatever, display("{message}"))]
pub struct GenericError {
    message: String,
    #[snafu(implicit)]
    location: Location,
    #[snafu(source(from(Box<dyn Error>, Some)))]
    source: Option<Box<dyn Error>>,
}

impl GenericError {
    pub fn location(&self) -> Location {
        self.location
    }
}

/// Returns where an error in the chain was raised, if it recorded that.
fn location_of(error: &(dyn Error + 'static)) -> Option<Location> {
    if let Some(err) = error.downcast_ref::<GenericError>() {
        return Some(err.location());
    }
    if let Some(err) = error.downcast_ref::<ConvertError>() {
        return Some(Location(err.location()));
    }
    None
}

/// Renders an error with its location and the chain of its sources.
pub struct Report<E> {
    error: E,
}

impl<E> fmt::Debug for Report<E>
where
    E: Error + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<E> fmt::Display for Report<E>
where
    E: Error + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let error: &(dyn Error + 'static) = &self.error;
        write!(f, "{}", WithFg::new(Color::Red, error))?;
        if let Some(loc) = location_of(error) {
            write!(f, "\n  at {}", WithFg::new(Color::DarkGray, loc))?;
        }
        let mut source = error.source();
        if source.is_some() {
            write!(f, "\n\nCaused by:")?;
        }
        let mut index = 0;
        while let Some(s) = source {
            write!(f, "\n{index:4}: {}", WithFg::new(Color::Red, s))?;
            if let Some(loc) = location_of(s) {
                write!(f, "\n      at {}", WithFg::new(Color::DarkGray, loc))?;
            }
            source = s.source();
            index += 1;
        }
        Ok(())
    }
}

impl<E> Report<E> {
    pub fn new(error: E) -> Self {
        Self { error }
    }
}
