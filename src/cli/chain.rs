//! Lets one subcommand be followed by another, so several edits can run against the same
//! in-memory dictionary in a single invocation.
//!
//! Adapted from https://github.com/clap-rs/clap/issues/2222#issuecomment-2524152894

use clap::{Args, FromArgMatches, Subcommand};

/// The options `T` of one step, followed by the step `U` that comes after it, if any.
#[derive(Debug, Clone)]
pub struct Chain<T, U>
where
    T: Args,
    U: Subcommand,
{
    pub inner: T,
    pub next: Option<Box<U>>,
}

impl<T, U> Chain<T, U>
where
    T: Args,
    U: Subcommand,
{
    /// Splits the step into its options and whatever follows.
    pub fn into_parts(self) -> (T, Option<U>) {
        (self.inner, self.next.map(|next| *next))
    }
}

impl<T, U> Args for Chain<T, U>
where
    T: Args,
    U: Subcommand,
{
    fn augment_args(cmd: clap::Command) -> clap::Command {
        T::augment_args(cmd).defer(|cmd| U::augment_subcommands(cmd.disable_help_subcommand(true)))
    }
    fn augment_args_for_update(cmd: clap::Command) -> clap::Command {
        T::augment_args_for_update(cmd)
            .defer(|cmd| U::augment_subcommands_for_update(cmd.disable_help_subcommand(true)))
    }
}

impl<T, U> FromArgMatches for Chain<T, U>
where
    T: Args,
    U: Subcommand,
{
    fn from_arg_matches(matches: &clap::ArgMatches) -> Result<Self, clap::Error> {
        let inner = T::from_arg_matches(matches)?;
        // `U` looks up the matched subcommand itself, so it is handed the outer matches.
        let next = if matches.subcommand().is_some() {
            Some(Box::new(U::from_arg_matches(matches)?))
        } else {
            None
        };
        Ok(Self { inner, next })
    }
    fn update_from_arg_matches(&mut self, matches: &clap::ArgMatches) -> Result<(), clap::Error> {
        self.inner.update_from_arg_matches(matches)?;
        if matches.subcommand().is_some() {
            match self.next.as_deref_mut() {
                Some(next) => next.update_from_arg_matches(matches)?,
                None => self.next = Some(Box::new(U::from_arg_matches(matches)?)),
            }
        }
        Ok(())
    }
}
