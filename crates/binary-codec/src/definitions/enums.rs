// Path: crates/binary-codec/src/definitions/enums.rs

//! Symbolic names for enumerated integer fields.
//!
//! `TransactionType`, `LedgerEntryType`, `TransactionResult` and
//! `PermissionValue` are plain integers on the wire, but are written and read
//! by name. The tables below map between the two.

/// Transaction type codes.
pub const TRANSACTION_TYPES: &[(&str, u16)] = &[
    ("Payment", 0),
    ("EscrowCreate", 1),
    ("EscrowFinish", 2),
    ("AccountSet", 3),
    ("EscrowCancel", 4),
    ("SetRegularKey", 5),
    ("NickNameSet", 6),
    ("OfferCreate", 7),
    ("OfferCancel", 8),
    ("Contract", 9),
    ("TicketCreate", 10),
    ("TicketCancel", 11),
    ("SignerListSet", 12),
    ("PaymentChannelCreate", 13),
    ("PaymentChannelFund", 14),
    ("PaymentChannelClaim", 15),
    ("CheckCreate", 16),
    ("CheckCash", 17),
    ("CheckCancel", 18),
    ("DepositPreauth", 19),
    ("TrustSet", 20),
    ("AccountDelete", 21),
    ("SetHook", 22),
    ("NFTokenMint", 25),
    ("NFTokenBurn", 26),
    ("NFTokenCreateOffer", 27),
    ("NFTokenCancelOffer", 28),
    ("NFTokenAcceptOffer", 29),
    ("Clawback", 30),
    ("AMMClawback", 31),
    ("AMMCreate", 35),
    ("AMMDeposit", 36),
    ("AMMWithdraw", 37),
    ("AMMVote", 38),
    ("AMMBid", 39),
    ("AMMDelete", 40),
    ("XChainCreateClaimID", 41),
    ("XChainCommit", 42),
    ("XChainClaim", 43),
    ("XChainAccountCreateCommit", 44),
    ("XChainAddClaimAttestation", 45),
    ("XChainAddAccountCreateAttestation", 46),
    ("XChainModifyBridge", 47),
    ("XChainCreateBridge", 48),
    ("DIDSet", 49),
    ("DIDDelete", 50),
    ("OracleSet", 51),
    ("OracleDelete", 52),
    ("LedgerStateFix", 53),
    ("MPTokenIssuanceCreate", 54),
    ("MPTokenIssuanceDestroy", 55),
    ("MPTokenIssuanceSet", 56),
    ("MPTokenAuthorize", 57),
    ("CredentialCreate", 58),
    ("CredentialAccept", 59),
    ("CredentialDelete", 60),
    ("NFTokenModify", 61),
    ("PermissionedDomainSet", 62),
    ("PermissionedDomainDelete", 63),
    ("DelegateSet", 64),
    ("VaultCreate", 65),
    ("VaultSet", 66),
    ("VaultDelete", 67),
    ("VaultDeposit", 68),
    ("VaultWithdraw", 69),
    ("VaultClawback", 70),
    ("Batch", 71),
    ("EnableAmendment", 100),
    ("SetFee", 101),
    ("UNLModify", 102),
];

/// Ledger entry type codes.
pub const LEDGER_ENTRY_TYPES: &[(&str, u16)] = &[
    ("NFTokenOffer", 55),
    ("Check", 67),
    ("DID", 73),
    ("NegativeUNL", 78),
    ("NFTokenPage", 80),
    ("SignerList", 83),
    ("Ticket", 84),
    ("AccountRoot", 97),
    ("DirectoryNode", 100),
    ("Amendments", 102),
    ("LedgerHashes", 104),
    ("Bridge", 105),
    ("Offer", 111),
    ("DepositPreauth", 112),
    ("XChainOwnedClaimID", 113),
    ("RippleState", 114),
    ("FeeSettings", 115),
    ("XChainOwnedCreateAccountClaimID", 116),
    ("Escrow", 117),
    ("PayChannel", 120),
    ("AMM", 121),
    ("MPTokenIssuance", 126),
    ("MPToken", 127),
    ("Oracle", 128),
    ("Credential", 129),
    ("PermissionedDomain", 130),
    ("Delegate", 131),
    ("Vault", 132),
];

/// Transaction result codes that fit the one-byte `TransactionResult` field.
pub const TRANSACTION_RESULTS: &[(&str, u8)] = &[
    ("tesSUCCESS", 0),
    ("tecCLAIM", 100),
    ("tecPATH_PARTIAL", 101),
    ("tecUNFUNDED_ADD", 102),
    ("tecUNFUNDED_OFFER", 103),
    ("tecUNFUNDED_PAYMENT", 104),
    ("tecFAILED_PROCESSING", 105),
    ("tecDIR_FULL", 121),
    ("tecINSUF_RESERVE_LINE", 122),
    ("tecINSUF_RESERVE_OFFER", 123),
    ("tecNO_DST", 124),
    ("tecNO_DST_INSUF_XRP", 125),
    ("tecNO_LINE_INSUF_RESERVE", 126),
    ("tecNO_LINE_REDUNDANT", 127),
    ("tecPATH_DRY", 128),
    ("tecUNFUNDED", 129),
    ("tecNO_ALTERNATIVE_KEY", 130),
    ("tecNO_REGULAR_KEY", 131),
    ("tecOWNERS", 132),
    ("tecNO_ISSUER", 133),
    ("tecNO_AUTH", 134),
    ("tecNO_LINE", 135),
    ("tecINSUFF_FEE", 136),
    ("tecFROZEN", 137),
    ("tecNO_TARGET", 138),
    ("tecNO_PERMISSION", 139),
    ("tecNO_ENTRY", 140),
    ("tecINSUFFICIENT_RESERVE", 141),
    ("tecNEED_MASTER_KEY", 142),
    ("tecDST_TAG_NEEDED", 143),
    ("tecINTERNAL", 144),
    ("tecOVERSIZE", 145),
    ("tecCRYPTOCONDITION_ERROR", 146),
    ("tecINVARIANT_FAILED", 147),
    ("tecEXPIRED", 148),
    ("tecDUPLICATE", 149),
    ("tecKILLED", 150),
    ("tecHAS_OBLIGATIONS", 151),
    ("tecTOO_SOON", 152),
    ("tecHOOK_REJECTED", 153),
    ("tecMAX_SEQUENCE_REACHED", 154),
    ("tecNO_SUITABLE_NFTOKEN_PAGE", 155),
    ("tecNFTOKEN_BUY_SELL_MISMATCH", 156),
    ("tecNFTOKEN_OFFER_TYPE_MISMATCH", 157),
    ("tecCANT_ACCEPT_OWN_NFTOKEN_OFFER", 158),
    ("tecINSUFFICIENT_FUNDS", 159),
    ("tecOBJECT_NOT_FOUND", 160),
    ("tecINSUFFICIENT_PAYMENT", 161),
    ("tecUNFUNDED_AMM", 162),
    ("tecAMM_BALANCE", 163),
    ("tecAMM_FAILED", 164),
    ("tecAMM_INVALID_TOKENS", 165),
    ("tecAMM_EMPTY", 166),
    ("tecAMM_NOT_EMPTY", 167),
    ("tecAMM_ACCOUNT", 168),
    ("tecINCOMPLETE", 169),
    ("tecXCHAIN_BAD_TRANSFER_ISSUE", 170),
    ("tecXCHAIN_NO_CLAIM_ID", 171),
    ("tecXCHAIN_BAD_CLAIM_ID", 172),
    ("tecXCHAIN_CLAIM_NO_QUORUM", 173),
    ("tecXCHAIN_PROOF_UNKNOWN_KEY", 174),
    ("tecXCHAIN_CREATE_ACCOUNT_NONXRP_ISSUE", 175),
    ("tecXCHAIN_WRONG_CHAIN", 176),
    ("tecXCHAIN_REWARD_MISMATCH", 177),
    ("tecXCHAIN_NO_SIGNERS_LIST", 178),
    ("tecXCHAIN_SENDING_ACCOUNT_MISMATCH", 179),
    ("tecXCHAIN_INSUFF_CREATE_AMOUNT", 180),
    ("tecXCHAIN_ACCOUNT_CREATE_PAST", 181),
    ("tecXCHAIN_ACCOUNT_CREATE_TOO_MANY", 182),
    ("tecXCHAIN_PAYMENT_FAILED", 183),
    ("tecXCHAIN_SELF_COMMIT", 184),
    ("tecXCHAIN_BAD_PUBLIC_KEY_ACCOUNT_PAIR", 185),
    ("tecXCHAIN_CREATE_ACCOUNT_DISABLED", 186),
    ("tecEMPTY_DID", 187),
    ("tecINVALID_UPDATE_TIME", 188),
    ("tecTOKEN_PAIR_NOT_FOUND", 189),
    ("tecARRAY_EMPTY", 190),
    ("tecARRAY_TOO_LARGE", 191),
    ("tecLOCKED", 192),
    ("tecBAD_CREDENTIALS", 193),
    ("tecWRONG_ASSET", 194),
    ("tecLIMIT_EXCEEDED", 195),
    ("tecPSEUDO_ACCOUNT", 196),
    ("tecPRECISION_LOSS", 197),
];

/// Delegatable permissions that are not a whole transaction type.
pub const GRANULAR_PERMISSIONS: &[(&str, u32)] = &[
    ("TrustlineAuthorize", 65537),
    ("TrustlineFreeze", 65538),
    ("TrustlineUnfreeze", 65539),
    ("AccountDomainSet", 65540),
    ("AccountEmailHashSet", 65541),
    ("AccountMessageKeySet", 65542),
    ("AccountTransferRateSet", 65543),
    ("AccountTickSizeSet", 65544),
    ("PaymentMint", 65545),
    ("PaymentBurn", 65546),
    ("MPTokenIssuanceLock", 65547),
    ("MPTokenIssuanceUnlock", 65548),
];

/// The enumerations an integer field can be read and written through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedEnum {
    /// `TransactionType` (UInt16).
    TransactionType,
    /// `LedgerEntryType` (UInt16).
    LedgerEntryType,
    /// `TransactionResult` (UInt8).
    TransactionResult,
    /// `PermissionValue` (UInt32). A transaction type name stands for its code
    /// plus one; granular permissions have their own codes.
    PermissionValue,
}

impl NamedEnum {
    /// The enumeration used by the named field, if any.
    pub fn for_field(field: &str) -> Option<NamedEnum> {
        match field {
            "TransactionType" => Some(NamedEnum::TransactionType),
            "LedgerEntryType" => Some(NamedEnum::LedgerEntryType),
            "TransactionResult" => Some(NamedEnum::TransactionResult),
            "PermissionValue" => Some(NamedEnum::PermissionValue),
            _ => None,
        }
    }

    /// Resolves a symbolic name to its code.
    pub fn code_of(self, name: &str) -> Option<u32> {
        match self {
            NamedEnum::TransactionType => lookup_code(TRANSACTION_TYPES, name),
            NamedEnum::LedgerEntryType => lookup_code(LEDGER_ENTRY_TYPES, name),
            NamedEnum::TransactionResult => lookup_code(TRANSACTION_RESULTS, name),
            NamedEnum::PermissionValue => lookup_code(GRANULAR_PERMISSIONS, name)
                .or_else(|| lookup_code(TRANSACTION_TYPES, name).map(|code| code + 1)),
        }
    }

    /// Resolves a code to its symbolic name.
    pub fn name_of(self, code: u32) -> Option<&'static str> {
        match self {
            NamedEnum::TransactionType => lookup_name(TRANSACTION_TYPES, code),
            NamedEnum::LedgerEntryType => lookup_name(LEDGER_ENTRY_TYPES, code),
            NamedEnum::TransactionResult => lookup_name(TRANSACTION_RESULTS, code),
            NamedEnum::PermissionValue => lookup_name(GRANULAR_PERMISSIONS, code).or_else(|| {
                code.checked_sub(1)
                    .and_then(|tx| lookup_name(TRANSACTION_TYPES, tx))
            }),
        }
    }
}

fn lookup_code<C: Copy + Into<u32>>(table: &[(&'static str, C)], name: &str) -> Option<u32> {
    table
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, code)| Into::<u32>::into(code))
}

fn lookup_name<C: Copy + Into<u32>>(
    table: &[(&'static str, C)],
    code: u32,
) -> Option<&'static str> {
    table
        .iter()
        .find(|&&(_, c)| Into::<u32>::into(c) == code)
        .map(|&(name, _)| name)
}
