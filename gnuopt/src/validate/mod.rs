//! Post-scan checks for mandatory options and option groups.
//!
//! Validation stops at the first violation. Mandatory options are checked
//! in declaration order before any group; groups are checked in the order
//! their first member was declared, exclusivity before the required rule.

use crate::{Opt, ParseError, ParseErrorKind, Set};


impl Set<'_> {
    /// Checks the state left by the last scan against the declared
    /// constraints.
    ///
    /// [`Set::parse`] calls this after a successful scan; it is public so
    /// values applied by other means can be checked the same way.
    ///
    /// # Errors
    ///
    /// Returns the first mandatory option left unset, the first group with
    /// two members set, or the first required group with none set.
    pub fn validate(&self) -> Result<(), ParseError> {
        self.check_constraints()
            .map_err(|kind| ParseError::new(self.program(), kind))
    }

    fn check_constraints(&self) -> Result<(), ParseErrorKind> {
        if let Some(missing) = self.iter().find(|opt| opt.is_mandatory() && !opt.was_set()) {
            return Err(ParseErrorKind::Mandatory(missing.name()));
        }
        for (group, members) in self.groups() {
            check_group(self.is_required(group), &members)?;
        }
        if let Some(empty) = self
            .required_groups()
            .iter()
            .find(|group| self.group_members(group).is_empty())
        {
            return Err(ParseErrorKind::EmptyGroup(empty.clone()));
        }
        Ok(())
    }

    fn is_required(&self, group: &str) -> bool {
        self.required_groups().iter().any(|required| required == group)
    }
}

fn check_group(required: bool, members: &[&Opt<'_>]) -> Result<(), ParseErrorKind> {
    let mut set = members.iter().filter(|opt| opt.was_set());
    match (set.next(), set.next()) {
        (Some(first), Some(second)) => Err(ParseErrorKind::MutuallyExclusive {
            first: first.name(),
            second: second.name(),
        }),
        (None, _) if required => Err(ParseErrorKind::GroupRequired {
            members: members.iter().map(|opt| opt.name()).collect(),
        }),
        _ => Ok(()),
    }
}
