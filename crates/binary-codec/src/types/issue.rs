// Path: crates/binary-codec/src/types/issue.rs

//! Asset identifiers and cross-chain bridge descriptors.

use super::currency::Currency;
use crate::serdes::{BinaryParser, BinarySerializer};
use xrpl_types::account::ACCOUNT_ID_LENGTH;
use xrpl_types::error::CodecError;
use xrpl_types::AccountId;

/// An asset: the native currency, or a currency together with its issuer.
///
/// Token (MPT) assets are not an `Issue`. Their bare 24-byte issuance id
/// carries no marker, so a reader could not tell it from the start of a
/// currency code without knowing the field's length out of band. Token
/// amounts use [`MptAmount`](super::MptAmount), which carries its own marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Issue {
    /// The native asset, written as 20 zero bytes.
    #[default]
    Xrp,
    /// An issued currency, written as currency then issuer.
    Issued {
        /// Currency code; never the native one.
        currency: Currency,
        /// The issuing account.
        issuer: AccountId,
    },
}

impl Issue {
    /// Appends the wire form.
    pub fn write(&self, sink: &mut BinarySerializer) -> Result<(), CodecError> {
        match self {
            Issue::Xrp => sink.write_bytes(Currency::XRP.as_bytes()),
            Issue::Issued { currency, issuer } => {
                if currency.is_xrp() {
                    return Err(CodecError::InvalidCurrency(
                        "an issued asset cannot use the native currency code".into(),
                    ));
                }
                sink.write_bytes(currency.as_bytes());
                sink.write_bytes(issuer.as_bytes());
            }
        }
        Ok(())
    }

    /// Reads an issue: 20 bytes, plus an issuer unless they are all zero.
    pub fn read(parser: &mut BinaryParser<'_>) -> Result<Self, CodecError> {
        let currency = Currency::from_bytes(parser.read_array()?);
        if currency.is_xrp() {
            return Ok(Issue::Xrp);
        }
        let issuer = AccountId(parser.read_array()?);
        Ok(Issue::Issued { currency, issuer })
    }
}

/// The two door accounts and assets that define a cross-chain bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XChainBridge {
    /// Door account on the locking chain.
    pub locking_chain_door: AccountId,
    /// Asset locked on the locking chain.
    pub locking_chain_issue: Issue,
    /// Door account on the issuing chain.
    pub issuing_chain_door: AccountId,
    /// Asset issued on the issuing chain.
    pub issuing_chain_issue: Issue,
}

// Each door account is written with its own one-byte length, like an
// AccountID field body.
const DOOR_LENGTH_PREFIX: u8 = ACCOUNT_ID_LENGTH as u8;

impl XChainBridge {
    /// Appends the wire form.
    pub fn write(&self, sink: &mut BinarySerializer) -> Result<(), CodecError> {
        sink.write_u8(DOOR_LENGTH_PREFIX);
        sink.write_bytes(self.locking_chain_door.as_bytes());
        self.locking_chain_issue.write(sink)?;
        sink.write_u8(DOOR_LENGTH_PREFIX);
        sink.write_bytes(self.issuing_chain_door.as_bytes());
        self.issuing_chain_issue.write(sink)
    }

    /// Reads a bridge descriptor.
    pub fn read(parser: &mut BinaryParser<'_>) -> Result<Self, CodecError> {
        let locking_chain_door = read_door(parser)?;
        let locking_chain_issue = Issue::read(parser)?;
        let issuing_chain_door = read_door(parser)?;
        let issuing_chain_issue = Issue::read(parser)?;
        Ok(Self {
            locking_chain_door,
            locking_chain_issue,
            issuing_chain_door,
            issuing_chain_issue,
        })
    }
}

fn read_door(parser: &mut BinaryParser<'_>) -> Result<AccountId, CodecError> {
    let offset = parser.position();
    let length = parser.read_u8()?;
    if length != DOOR_LENGTH_PREFIX {
        return Err(CodecError::NonCanonical {
            offset,
            reason: format!("door account length byte is {length}, expected {DOOR_LENGTH_PREFIX}"),
        });
    }
    Ok(AccountId(parser.read_array()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd() -> Currency {
        "USD".parse().unwrap()
    }

    fn written(f: impl FnOnce(&mut BinarySerializer) -> Result<(), CodecError>) -> Vec<u8> {
        let mut sink = BinarySerializer::new();
        f(&mut sink).unwrap();
        sink.into_bytes()
    }

    #[test]
    fn xrp_issue_is_twenty_zero_bytes() {
        let bytes = written(|s| Issue::Xrp.write(s));
        assert_eq!(bytes, vec![0u8; 20]);
        assert_eq!(Issue::read(&mut BinaryParser::new(&bytes)).unwrap(), Issue::Xrp);
    }

    #[test]
    fn issued_issue_carries_its_issuer() {
        let issue = Issue::Issued {
            currency: usd(),
            issuer: AccountId([7; 20]),
        };
        let bytes = written(|s| issue.write(s));
        assert_eq!(bytes.len(), 40);
        assert_eq!(&bytes[20..], &[7u8; 20]);
        let mut parser = BinaryParser::new(&bytes);
        assert_eq!(Issue::read(&mut parser).unwrap(), issue);
        assert!(parser.is_empty());
    }

    #[test]
    fn a_bare_issuance_id_is_not_an_issue() {
        let issuance_id = [0x5Au8; 24];
        assert!(matches!(
            Issue::read(&mut BinaryParser::new(&issuance_id)),
            Err(CodecError::Truncated {
                offset: 20,
                needed: 20,
                available: 4
            })
        ));
    }

    #[test]
    fn bridge_layout() {
        let bridge = XChainBridge {
            locking_chain_door: AccountId([1; 20]),
            locking_chain_issue: Issue::Xrp,
            issuing_chain_door: AccountId([2; 20]),
            issuing_chain_issue: Issue::Issued {
                currency: usd(),
                issuer: AccountId([3; 20]),
            },
        };
        let bytes = written(|s| bridge.write(s));
        assert_eq!(bytes.len(), 1 + 20 + 20 + 1 + 20 + 40);
        assert_eq!(bytes[0], 0x14);
        assert_eq!(bytes[41], 0x14);
        let mut parser = BinaryParser::new(&bytes);
        assert_eq!(XChainBridge::read(&mut parser).unwrap(), bridge);
        assert!(parser.is_empty());
    }

    #[test]
    fn bridge_rejects_a_wrong_door_length() {
        let mut bytes = vec![0x13];
        bytes.extend_from_slice(&[0u8; 100]);
        assert!(matches!(
            XChainBridge::read(&mut BinaryParser::new(&bytes)),
            Err(CodecError::NonCanonical { offset: 0, .. })
        ));
    }
}
