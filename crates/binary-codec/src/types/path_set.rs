// Path: crates/binary-codec/src/types/path_set.rs

//! Payment paths.
//!
//! A path set is a list of paths, each a list of steps. On the wire each step
//! is a flag byte followed by the members it announces; `0xFF` separates paths
//! and `0x00` ends the set.

use super::currency::Currency;
use crate::serdes::{BinaryParser, BinarySerializer};
use xrpl_types::error::CodecError;
use xrpl_types::AccountId;

/// Byte separating two paths.
pub const PATH_SEPARATOR: u8 = 0xFF;
/// Byte ending a path set.
pub const PATH_SET_END: u8 = 0x00;

bitflags::bitflags! {
    /// The members a path step carries.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PathStepFlags: u8 {
        /// A 20-byte account follows.
        const ACCOUNT = 0x01;
        /// A 20-byte currency follows.
        const CURRENCY = 0x10;
        /// A 20-byte issuer follows.
        const ISSUER = 0x20;
    }
}

/// One hop of a payment path.
///
/// A step names an account, a currency, an issuer, or a currency together with
/// its issuer. Other combinations are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathStep {
    account: Option<AccountId>,
    currency: Option<Currency>,
    issuer: Option<AccountId>,
}

impl PathStep {
    /// Builds a step from its members, checking the combination.
    pub fn new(
        account: Option<AccountId>,
        currency: Option<Currency>,
        issuer: Option<AccountId>,
    ) -> Result<Self, CodecError> {
        match (account.is_some(), currency, issuer.is_some()) {
            (true, None, false) | (false, Some(_), false) | (false, None, true) => {}
            (false, Some(c), true) if !c.is_xrp() => {}
            (false, Some(_), true) => {
                return Err(CodecError::InvalidPathStep(
                    "a step with an issuer cannot use the native currency".into(),
                ))
            }
            (false, None, false) => {
                return Err(CodecError::InvalidPathStep("a step must carry a member".into()))
            }
            _ => {
                return Err(CodecError::InvalidPathStep(
                    "an account cannot be combined with a currency or issuer".into(),
                ))
            }
        }
        Ok(Self {
            account,
            currency,
            issuer,
        })
    }

    /// A step through an account.
    pub fn account(account: AccountId) -> Self {
        Self {
            account: Some(account),
            currency: None,
            issuer: None,
        }
    }

    /// A step into a currency, the native one included.
    pub fn currency(currency: Currency) -> Self {
        Self {
            account: None,
            currency: Some(currency),
            issuer: None,
        }
    }

    /// A step through an issuer.
    pub fn issuer(issuer: AccountId) -> Self {
        Self {
            account: None,
            currency: None,
            issuer: Some(issuer),
        }
    }

    /// A step into an issued currency.
    pub fn currency_issuer(currency: Currency, issuer: AccountId) -> Result<Self, CodecError> {
        Self::new(None, Some(currency), Some(issuer))
    }

    /// The account member.
    pub fn account_member(&self) -> Option<&AccountId> {
        self.account.as_ref()
    }

    /// The currency member.
    pub fn currency_member(&self) -> Option<&Currency> {
        self.currency.as_ref()
    }

    /// The issuer member.
    pub fn issuer_member(&self) -> Option<&AccountId> {
        self.issuer.as_ref()
    }

    /// Flags announcing the members present.
    pub fn flags(&self) -> PathStepFlags {
        let mut flags = PathStepFlags::empty();
        flags.set(PathStepFlags::ACCOUNT, self.account.is_some());
        flags.set(PathStepFlags::CURRENCY, self.currency.is_some());
        flags.set(PathStepFlags::ISSUER, self.issuer.is_some());
        flags
    }

    fn write(&self, sink: &mut BinarySerializer) {
        sink.write_u8(self.flags().bits());
        if let Some(account) = &self.account {
            sink.write_bytes(account.as_bytes());
        }
        if let Some(currency) = &self.currency {
            sink.write_bytes(currency.as_bytes());
        }
        if let Some(issuer) = &self.issuer {
            sink.write_bytes(issuer.as_bytes());
        }
    }

    fn read(
        parser: &mut BinaryParser<'_>,
        flag_byte: u8,
        offset: usize,
    ) -> Result<Self, CodecError> {
        let flags = PathStepFlags::from_bits(flag_byte).ok_or_else(|| {
            CodecError::InvalidPathStep(format!(
                "unknown flag bits {flag_byte:#04x} at offset {offset}"
            ))
        })?;
        let account = flags
            .contains(PathStepFlags::ACCOUNT)
            .then(|| parser.read_array().map(AccountId))
            .transpose()?;
        let currency = flags
            .contains(PathStepFlags::CURRENCY)
            .then(|| parser.read_array().map(Currency::from_bytes))
            .transpose()?;
        let issuer = flags
            .contains(PathStepFlags::ISSUER)
            .then(|| parser.read_array().map(AccountId))
            .transpose()?;
        Self::new(account, currency, issuer).map_err(|e| match e {
            CodecError::InvalidPathStep(reason) => {
                CodecError::InvalidPathStep(format!("{reason} (offset {offset})"))
            }
            other => other,
        })
    }
}

/// A non-empty sequence of steps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path(Vec<PathStep>);

impl Path {
    /// Wraps `steps`, which must not be empty.
    pub fn new(steps: Vec<PathStep>) -> Result<Self, CodecError> {
        if steps.is_empty() {
            return Err(CodecError::InvalidPathStep("a path must have at least one step".into()));
        }
        Ok(Path(steps))
    }

    /// The steps in order.
    pub fn steps(&self) -> &[PathStep] {
        &self.0
    }
}

/// A non-empty set of paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathSet(Vec<Path>);

impl PathSet {
    /// Wraps `paths`, which must not be empty.
    pub fn new(paths: Vec<Path>) -> Result<Self, CodecError> {
        if paths.is_empty() {
            return Err(CodecError::InvalidPathStep(
                "a path set must have at least one path".into(),
            ));
        }
        Ok(PathSet(paths))
    }

    /// The paths in order.
    pub fn paths(&self) -> &[Path] {
        &self.0
    }

    /// Appends the wire form, terminator included.
    pub fn write(&self, sink: &mut BinarySerializer) {
        for (i, path) in self.0.iter().enumerate() {
            if i > 0 {
                sink.write_u8(PATH_SEPARATOR);
            }
            for step in path.steps() {
                step.write(sink);
            }
        }
        sink.write_u8(PATH_SET_END);
    }

    /// Reads steps up to and including the terminator.
    pub fn read(parser: &mut BinaryParser<'_>) -> Result<Self, CodecError> {
        let mut paths = Vec::new();
        let mut steps = Vec::new();
        loop {
            let offset = parser.position();
            match parser.read_u8()? {
                PATH_SET_END => {
                    paths.push(Self::close_path(steps, offset)?);
                    return Ok(PathSet(paths));
                }
                PATH_SEPARATOR => {
                    paths.push(Self::close_path(steps, offset)?);
                    steps = Vec::new();
                }
                flag_byte => steps.push(PathStep::read(parser, flag_byte, offset)?),
            }
        }
    }

    fn close_path(steps: Vec<PathStep>, offset: usize) -> Result<Path, CodecError> {
        Path::new(steps).map_err(|_| {
            CodecError::InvalidPathStep(format!("empty path ending at offset {offset}"))
        })
    }
}
