// Path: crates/binary-codec/src/definitions/fields.rs

//! The field table, as published in the ledger's protocol definitions.
//!
//! Entries are `(name, declared type, field code)`. Field codes above 255 mark
//! client-side bookkeeping fields that are never serialized.

use super::TypeTag::{self, *};

/// Fields excluded from the signing payload.
pub const NON_SIGNING_FIELDS: &[&str] = &[
    "TxnSignature",
    "Signature",
    "MasterSignature",
    "Signers",
    "BatchSigners",
];

/// Every known field.
pub const FIELDS: &[(&str, TypeTag, u16)] = &[
    // UInt8
    ("CloseResolution", UInt8, 1),
    ("Method", UInt8, 2),
    ("TransactionResult", UInt8, 3),
    ("Scale", UInt8, 4),
    ("AssetScale", UInt8, 5),
    ("TickSize", UInt8, 16),
    ("UNLModifyDisabling", UInt8, 17),
    ("HookResult", UInt8, 18),
    ("WasLockingChainSend", UInt8, 19),
    ("WithdrawalPolicy", UInt8, 20),
    // UInt16
    ("LedgerEntryType", UInt16, 1),
    ("TransactionType", UInt16, 2),
    ("SignerWeight", UInt16, 3),
    ("TransferFee", UInt16, 4),
    ("TradingFee", UInt16, 5),
    ("DiscountedFee", UInt16, 6),
    ("Version", UInt16, 16),
    ("HookStateChangeCount", UInt16, 17),
    ("HookEmitCount", UInt16, 18),
    ("HookExecutionIndex", UInt16, 19),
    ("HookApiVersion", UInt16, 20),
    ("LedgerFixType", UInt16, 21),
    // UInt32
    ("NetworkID", UInt32, 1),
    ("Flags", UInt32, 2),
    ("SourceTag", UInt32, 3),
    ("Sequence", UInt32, 4),
    ("PreviousTxnLgrSeq", UInt32, 5),
    ("LedgerSequence", UInt32, 6),
    ("CloseTime", UInt32, 7),
    ("ParentCloseTime", UInt32, 8),
    ("SigningTime", UInt32, 9),
    ("Expiration", UInt32, 10),
    ("TransferRate", UInt32, 11),
    ("WalletSize", UInt32, 12),
    ("OwnerCount", UInt32, 13),
    ("DestinationTag", UInt32, 14),
    ("LastUpdateTime", UInt32, 15),
    ("HighQualityIn", UInt32, 16),
    ("HighQualityOut", UInt32, 17),
    ("LowQualityIn", UInt32, 18),
    ("LowQualityOut", UInt32, 19),
    ("QualityIn", UInt32, 20),
    ("QualityOut", UInt32, 21),
    ("StampEscrow", UInt32, 22),
    ("BondAmount", UInt32, 23),
    ("LoadFee", UInt32, 24),
    ("OfferSequence", UInt32, 25),
    ("FirstLedgerSequence", UInt32, 26),
    ("LastLedgerSequence", UInt32, 27),
    ("TransactionIndex", UInt32, 28),
    ("OperationLimit", UInt32, 29),
    ("ReferenceFeeUnits", UInt32, 30),
    ("ReserveBase", UInt32, 31),
    ("ReserveIncrement", UInt32, 32),
    ("SetFlag", UInt32, 33),
    ("ClearFlag", UInt32, 34),
    ("SignerQuorum", UInt32, 35),
    ("CancelAfter", UInt32, 36),
    ("FinishAfter", UInt32, 37),
    ("SignerListID", UInt32, 38),
    ("SettleDelay", UInt32, 39),
    ("TicketCount", UInt32, 40),
    ("TicketSequence", UInt32, 41),
    ("NFTokenTaxon", UInt32, 42),
    ("MintedNFTokens", UInt32, 43),
    ("BurnedNFTokens", UInt32, 44),
    ("HookStateCount", UInt32, 45),
    ("EmitGeneration", UInt32, 46),
    ("VoteWeight", UInt32, 48),
    ("FirstNFTokenSequence", UInt32, 50),
    ("OracleDocumentID", UInt32, 51),
    ("PermissionValue", UInt32, 52),
    // UInt64
    ("IndexNext", UInt64, 1),
    ("IndexPrevious", UInt64, 2),
    ("BookNode", UInt64, 3),
    ("OwnerNode", UInt64, 4),
    ("BaseFee", UInt64, 5),
    ("ExchangeRate", UInt64, 6),
    ("LowNode", UInt64, 7),
    ("HighNode", UInt64, 8),
    ("DestinationNode", UInt64, 9),
    ("Cookie", UInt64, 10),
    ("ServerVersion", UInt64, 11),
    ("NFTokenOfferNode", UInt64, 12),
    ("EmitBurden", UInt64, 13),
    ("HookOn", UInt64, 16),
    ("HookInstructionCount", UInt64, 17),
    ("HookReturnCode", UInt64, 18),
    ("ReferenceCount", UInt64, 19),
    ("XChainClaimID", UInt64, 20),
    ("XChainAccountCreateCount", UInt64, 21),
    ("XChainAccountClaimCount", UInt64, 22),
    ("AssetPrice", UInt64, 23),
    ("MaximumAmount", UInt64, 24),
    ("OutstandingAmount", UInt64, 25),
    ("MPTAmount", UInt64, 26),
    ("IssuerNode", UInt64, 27),
    ("SubjectNode", UInt64, 28),
    // Hash128
    ("EmailHash", Hash128, 1),
    // Hash160
    ("TakerPaysCurrency", Hash160, 1),
    ("TakerPaysIssuer", Hash160, 2),
    ("TakerGetsCurrency", Hash160, 3),
    ("TakerGetsIssuer", Hash160, 4),
    // Hash192
    ("MPTokenIssuanceID", Hash192, 1),
    ("ShareMPTID", Hash192, 2),
    // Hash256
    ("LedgerHash", Hash256, 1),
    ("ParentHash", Hash256, 2),
    ("TransactionHash", Hash256, 3),
    ("AccountHash", Hash256, 4),
    ("PreviousTxnID", Hash256, 5),
    ("LedgerIndex", Hash256, 6),
    ("WalletLocator", Hash256, 7),
    ("RootIndex", Hash256, 8),
    ("AccountTxnID", Hash256, 9),
    ("NFTokenID", Hash256, 10),
    ("EmitParentTxnID", Hash256, 11),
    ("EmitNonce", Hash256, 12),
    ("EmitHookHash", Hash256, 13),
    ("AMMID", Hash256, 14),
    ("BookDirectory", Hash256, 16),
    ("InvoiceID", Hash256, 17),
    ("Nickname", Hash256, 18),
    ("Amendment", Hash256, 19),
    ("Digest", Hash256, 21),
    ("Channel", Hash256, 22),
    ("ConsensusHash", Hash256, 23),
    ("CheckID", Hash256, 24),
    ("ValidatedHash", Hash256, 25),
    ("PreviousPageMin", Hash256, 26),
    ("NextPageMin", Hash256, 27),
    ("NFTokenBuyOffer", Hash256, 28),
    ("NFTokenSellOffer", Hash256, 29),
    ("HookStateKey", Hash256, 30),
    ("HookHash", Hash256, 31),
    ("HookNamespace", Hash256, 32),
    ("HookSetTxnID", Hash256, 33),
    ("DomainID", Hash256, 34),
    ("VaultID", Hash256, 35),
    ("ParentBatchID", Hash256, 36),
    ("hash", Hash256, 257),
    ("index", Hash256, 258),
    // Amount
    ("Amount", Amount, 1),
    ("Balance", Amount, 2),
    ("LimitAmount", Amount, 3),
    ("TakerPays", Amount, 4),
    ("TakerGets", Amount, 5),
    ("LowLimit", Amount, 6),
    ("HighLimit", Amount, 7),
    ("Fee", Amount, 8),
    ("SendMax", Amount, 9),
    ("DeliverMin", Amount, 10),
    ("Amount2", Amount, 11),
    ("BidMin", Amount, 12),
    ("BidMax", Amount, 13),
    ("MinimumOffer", Amount, 16),
    ("RippleEscrow", Amount, 17),
    ("DeliveredAmount", Amount, 18),
    ("NFTokenBrokerFee", Amount, 19),
    ("BaseFeeDrops", Amount, 22),
    ("ReserveBaseDrops", Amount, 23),
    ("ReserveIncrementDrops", Amount, 24),
    ("LPTokenOut", Amount, 25),
    ("LPTokenIn", Amount, 26),
    ("EPrice", Amount, 27),
    ("Price", Amount, 28),
    ("SignatureReward", Amount, 29),
    ("MinAccountCreateAmount", Amount, 30),
    ("LPTokenBalance", Amount, 31),
    ("taker_gets_funded", Amount, 258),
    ("taker_pays_funded", Amount, 259),
    // Blob
    ("PublicKey", Blob, 1),
    ("MessageKey", Blob, 2),
    ("SigningPubKey", Blob, 3),
    ("TxnSignature", Blob, 4),
    ("URI", Blob, 5),
    ("Signature", Blob, 6),
    ("Domain", Blob, 7),
    ("FundCode", Blob, 8),
    ("RemoveCode", Blob, 9),
    ("ExpireCode", Blob, 10),
    ("CreateCode", Blob, 11),
    ("MemoType", Blob, 12),
    ("MemoData", Blob, 13),
    ("MemoFormat", Blob, 14),
    ("Fulfillment", Blob, 16),
    ("Condition", Blob, 17),
    ("MasterSignature", Blob, 18),
    ("UNLModifyValidator", Blob, 19),
    ("ValidatorToDisable", Blob, 20),
    ("ValidatorToReEnable", Blob, 21),
    ("HookStateData", Blob, 22),
    ("HookReturnString", Blob, 23),
    ("HookParameterName", Blob, 24),
    ("HookParameterValue", Blob, 25),
    ("DIDDocument", Blob, 26),
    ("Data", Blob, 27),
    ("AssetClass", Blob, 28),
    ("Provider", Blob, 29),
    ("MPTokenMetadata", Blob, 30),
    ("CredentialType", Blob, 31),
    // AccountID
    ("Account", AccountId, 1),
    ("Owner", AccountId, 2),
    ("Destination", AccountId, 3),
    ("Issuer", AccountId, 4),
    ("Authorize", AccountId, 5),
    ("Unauthorize", AccountId, 6),
    ("RegularKey", AccountId, 8),
    ("NFTokenMinter", AccountId, 9),
    ("EmitCallback", AccountId, 10),
    ("Holder", AccountId, 11),
    ("HookAccount", AccountId, 16),
    ("OtherChainSource", AccountId, 18),
    ("OtherChainDestination", AccountId, 19),
    ("AttestationSignerAccount", AccountId, 20),
    ("AttestationRewardAccount", AccountId, 21),
    ("LockingChainDoor", AccountId, 22),
    ("IssuingChainDoor", AccountId, 23),
    ("Subject", AccountId, 24),
    // Vector256
    ("Indexes", Vector256, 1),
    ("Hashes", Vector256, 2),
    ("Amendments", Vector256, 3),
    ("NFTokenOffers", Vector256, 4),
    ("CredentialIDs", Vector256, 5),
    // STObject
    ("ObjectEndMarker", StObject, 1),
    ("TransactionMetaData", StObject, 2),
    ("CreatedNode", StObject, 3),
    ("DeletedNode", StObject, 4),
    ("ModifiedNode", StObject, 5),
    ("PreviousFields", StObject, 6),
    ("FinalFields", StObject, 7),
    ("NewFields", StObject, 8),
    ("TemplateEntry", StObject, 9),
    ("Memo", StObject, 10),
    ("SignerEntry", StObject, 11),
    ("NFToken", StObject, 12),
    ("EmitDetails", StObject, 13),
    ("Hook", StObject, 14),
    ("Permission", StObject, 15),
    ("Signer", StObject, 16),
    ("Majority", StObject, 18),
    ("DisabledValidator", StObject, 19),
    ("EmittedTxn", StObject, 20),
    ("HookExecution", StObject, 21),
    ("HookDefinition", StObject, 22),
    ("HookParameter", StObject, 23),
    ("HookGrant", StObject, 24),
    ("VoteEntry", StObject, 25),
    ("AuctionSlot", StObject, 26),
    ("AuthAccount", StObject, 27),
    ("XChainClaimProofSig", StObject, 28),
    ("XChainCreateAccountProofSig", StObject, 29),
    ("XChainClaimAttestationCollectionElement", StObject, 30),
    ("XChainCreateAccountAttestationCollectionElement", StObject, 31),
    ("PriceData", StObject, 32),
    ("Credential", StObject, 33),
    ("RawTransaction", StObject, 34),
    ("BatchSigner", StObject, 35),
    // STArray
    ("ArrayEndMarker", StArray, 1),
    ("Signers", StArray, 3),
    ("SignerEntries", StArray, 4),
    ("Template", StArray, 5),
    ("Necessary", StArray, 6),
    ("Sufficient", StArray, 7),
    ("AffectedNodes", StArray, 8),
    ("Memos", StArray, 9),
    ("NFTokens", StArray, 10),
    ("Hooks", StArray, 11),
    ("VoteSlots", StArray, 12),
    ("Majorities", StArray, 16),
    ("DisabledValidators", StArray, 17),
    ("HookExecutions", StArray, 18),
    ("HookParameters", StArray, 19),
    ("HookGrants", StArray, 20),
    ("XChainClaimAttestations", StArray, 21),
    ("XChainCreateAccountAttestations", StArray, 22),
    ("PriceDataSeries", StArray, 24),
    ("AuthAccounts", StArray, 25),
    ("AuthorizeCredentials", StArray, 26),
    ("UnauthorizeCredentials", StArray, 27),
    ("AcceptedCredentials", StArray, 28),
    ("Permissions", StArray, 29),
    ("RawTransactions", StArray, 30),
    ("BatchSigners", StArray, 31),
    // PathSet
    ("Paths", PathSet, 1),
    // Issue
    ("LockingChainIssue", Issue, 1),
    ("IssuingChainIssue", Issue, 2),
    ("Asset", Issue, 3),
    ("Asset2", Issue, 4),
    // XChainBridge
    ("XChainBridge", XChainBridge, 1),
    // Currency
    ("BaseAsset", Currency, 1),
    ("QuoteAsset", Currency, 2),
];
