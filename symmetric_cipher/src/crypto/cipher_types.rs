use thiserror::Error;

/// Режимы сцепления блоков.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherMode {
    ECB,
    CBC,
    PCBC,
    CFB,
    OFB,
    CTR,
    RandomDelta,
}

/// Схемы набивки последнего блока.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingMode {
    Zeros,
    ANSI_X923,
    PKCS7,
    ISO10126,
}

/// Общий тип ошибок криптографического ядра.
#[derive(Debug, Error)]
pub enum CipherError {
    #[error("key must be {expected} bytes, got {got}")]
    InvalidKeySize { got: usize, expected: usize },

    #[error("key length must be 16, 24 or 32 bytes, got {got}")]
    UnsupportedKeySize { got: usize },

    #[error("block size must be 16, 24 or 32 bytes, got {got}")]
    UnsupportedBlockSize { got: usize },

    #[error("block must be {expected} bytes, got {got}")]
    InvalidBlockSize { got: usize, expected: usize },

    #[error("block size {size} must be even for a Feistel network")]
    OddBlockSize { size: usize },

    #[error("IV must be {expected} bytes, got {got}")]
    InvalidIvLength { got: usize, expected: usize },

    #[error("round key must be {expected} bytes, got {got}")]
    InvalidRoundKey { got: usize, expected: usize },

    #[error("key schedule produced {got} round keys, {need} required")]
    InsufficientRoundKeys { got: usize, need: usize },

    #[error("key not set, call set_key first")]
    KeyNotSet,

    #[error("cipher instance is shared and cannot be rekeyed")]
    CipherInUse,

    #[error("bit position {position} is outside the {bits}-bit input")]
    PermutationOutOfRange { position: usize, bits: usize },

    #[error("ciphertext length {len} is not a multiple of {stride}")]
    InvalidCiphertextLength { len: usize, stride: usize },

    #[error("zero has no multiplicative inverse in GF(2^8)")]
    ZeroInverse,

    #[error("no inverse for 0x{value:02x} under modulus 0x{modulus:02x}")]
    NoInverse { value: u8, modulus: u8 },

    #[error("random byte source failed: {0}")]
    RandomSource(String),

    #[error("{mode:?} {op} failed at block {index}: {source}")]
    BlockFailure {
        mode: CipherMode,
        op: &'static str,
        index: usize,
        #[source]
        source: Box<CipherError>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
