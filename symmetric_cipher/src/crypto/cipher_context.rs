use crate::crypto::cipher_traits::SymmetricCipher;
use crate::crypto::cipher_types::{CipherError, CipherMode, PaddingMode};
use crate::crypto::utils::{
    apply_padding, generate_random_bytes, increment_counter, remove_padding, xor_blocks,
};
use log::debug;
use rayon::prelude::*;
use std::path::Path;
use std::sync::Arc;
use std::fmt;
use std::thread::available_parallelism;

/// Контекст шифрования: блочный шифр + режим + набивка + IV.
///
/// Для всех режимов, кроме ECB, IV обязан совпадать с размером блока;
/// пустой IV заменяется нулевым. Контекст не защищён от одновременных
/// вызовов `encrypt`/`decrypt` из разных потоков — синхронизация на
/// вызывающей стороне.
#[derive(Clone)]
pub struct CipherContext {
    cipher: Arc<dyn SymmetricCipher + Send + Sync>,
    key: Vec<u8>,
    mode: CipherMode,
    padding: PaddingMode,
    iv: Vec<u8>,
    block_size: usize,
    parallel: bool,
}

impl fmt::Debug for CipherContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherContext")
            .field("key", &self.key)
            .field("mode", &self.mode)
            .field("padding", &self.padding)
            .field("iv", &self.iv)
            .field("block_size", &self.block_size)
            .field("parallel", &self.parallel)
            .finish()
    }
}

impl CipherContext {
    pub fn new(
        mut cipher: Box<dyn SymmetricCipher + Send + Sync>,
        key: &[u8],
        mode: CipherMode,
        padding: PaddingMode,
        iv: &[u8],
        block_size: usize,
        parallel: bool,
    ) -> Result<Self, CipherError> {
        if block_size != cipher.block_size() {
            return Err(CipherError::InvalidBlockSize {
                got: block_size,
                expected: cipher.block_size(),
            });
        }

        cipher.set_key(key)?;

        let iv = if iv.is_empty() && mode != CipherMode::ECB {
            vec![0u8; block_size]
        } else {
            if mode != CipherMode::ECB && iv.len() != block_size {
                return Err(CipherError::InvalidIvLength {
                    got: iv.len(),
                    expected: block_size,
                });
            }
            iv.to_vec()
        };

        Ok(CipherContext {
            cipher: Arc::from(cipher),
            key: key.to_vec(),
            mode,
            padding,
            iv,
            block_size,
            parallel,
        })
    }

    pub fn mode(&self) -> CipherMode {
        self.mode
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        let cipher = Arc::get_mut(&mut self.cipher).ok_or(CipherError::CipherInUse)?;
        cipher.set_key(key)?;
        self.key = key.to_vec();
        Ok(())
    }

    pub fn set_mode(&mut self, mode: CipherMode) {
        self.mode = mode;
    }

    pub fn set_padding_mode(&mut self, padding: PaddingMode) {
        self.padding = padding;
    }

    pub fn set_iv(&mut self, iv: &[u8]) -> Result<(), CipherError> {
        if self.mode != CipherMode::ECB && iv.len() != self.block_size {
            return Err(CipherError::InvalidIvLength {
                got: iv.len(),
                expected: self.block_size,
            });
        }
        self.iv = iv.to_vec();
        Ok(())
    }

    fn cipher_encrypt(&self, block: &[u8], index: usize) -> Result<Vec<u8>, CipherError> {
        self.cipher
            .encrypt_block(block)
            .map_err(|source| CipherError::BlockFailure {
                mode: self.mode,
                op: "encryption",
                index,
                source: Box::new(source),
            })
    }

    fn cipher_decrypt(&self, block: &[u8], index: usize) -> Result<Vec<u8>, CipherError> {
        self.cipher
            .decrypt_block(block)
            .map_err(|source| CipherError::BlockFailure {
                mode: self.mode,
                op: "decryption",
                index,
                source: Box::new(source),
            })
    }

    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, CipherError> {
        let padded = apply_padding(plaintext, self.block_size, self.padding)?;

        if self.parallel {
            match self.mode {
                CipherMode::ECB => return self.process_ecb_parallel(&padded, true),
                CipherMode::CTR => return self.process_ctr_parallel(&padded),
                _ => {}
            }
        }

        self.encrypt_sequential(&padded)
    }

    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CipherError> {
        let stride = match self.mode {
            CipherMode::RandomDelta => 2 * self.block_size,
            _ => self.block_size,
        };
        if ciphertext.len() % stride != 0 {
            return Err(CipherError::InvalidCiphertextLength {
                len: ciphertext.len(),
                stride,
            });
        }

        let plaintext = if self.parallel && self.mode == CipherMode::ECB {
            self.process_ecb_parallel(ciphertext, false)?
        } else if self.parallel && self.mode == CipherMode::CTR {
            self.process_ctr_parallel(ciphertext)?
        } else {
            self.decrypt_sequential(ciphertext)?
        };

        Ok(remove_padding(&plaintext, self.block_size, self.padding))
    }

    /// Шифрует файл целиком в памяти, как и остальной контекст.
    pub fn encrypt_file(
        &self,
        input_path: impl AsRef<Path>,
        output_path: impl AsRef<Path>,
    ) -> Result<(), CipherError> {
        let data = std::fs::read(input_path)?;
        let encrypted = self.encrypt(&data)?;
        std::fs::write(output_path, encrypted)?;
        Ok(())
    }

    pub fn decrypt_file(
        &self,
        input_path: impl AsRef<Path>,
        output_path: impl AsRef<Path>,
    ) -> Result<(), CipherError> {
        let data = std::fs::read(input_path)?;
        let decrypted = self.decrypt(&data)?;
        std::fs::write(output_path, decrypted)?;
        Ok(())
    }

    fn encrypt_sequential(&self, padded: &[u8]) -> Result<Vec<u8>, CipherError> {
        let capacity = match self.mode {
            CipherMode::RandomDelta => 2 * padded.len(),
            _ => padded.len(),
        };
        let mut ciphertext = Vec::with_capacity(capacity);
        let mut chaining = self.iv.clone();

        for (index, block) in padded.chunks(self.block_size).enumerate() {
            match self.mode {
                CipherMode::ECB => {
                    ciphertext.extend_from_slice(&self.cipher_encrypt(block, index)?);
                }
                CipherMode::CBC => {
                    let xored = xor_blocks(block, &chaining);
                    let encrypted = self.cipher_encrypt(&xored, index)?;
                    chaining.clone_from(&encrypted);
                    ciphertext.extend_from_slice(&encrypted);
                }
                CipherMode::PCBC => {
                    let xored = xor_blocks(block, &chaining);
                    let encrypted = self.cipher_encrypt(&xored, index)?;
                    chaining = xor_blocks(block, &encrypted);
                    ciphertext.extend_from_slice(&encrypted);
                }
                CipherMode::CFB => {
                    let keystream = self.cipher_encrypt(&chaining, index)?;
                    let encrypted = xor_blocks(&keystream, block);
                    chaining.clone_from(&encrypted);
                    ciphertext.extend_from_slice(&encrypted);
                }
                CipherMode::OFB => {
                    chaining = self.cipher_encrypt(&chaining, index)?;
                    ciphertext.extend_from_slice(&xor_blocks(&chaining, block));
                }
                CipherMode::CTR => {
                    let keystream = self.cipher_encrypt(&chaining, index)?;
                    ciphertext.extend_from_slice(&xor_blocks(&keystream, block));
                    increment_counter(&mut chaining);
                }
                CipherMode::RandomDelta => {
                    let mut delta = vec![0u8; self.block_size];
                    generate_random_bytes(&mut delta)?;
                    let encrypted = self.cipher_encrypt(&xor_blocks(block, &delta), index)?;
                    ciphertext.extend_from_slice(&delta);
                    ciphertext.extend_from_slice(&encrypted);
                }
            }
        }

        Ok(ciphertext)
    }

    fn decrypt_sequential(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CipherError> {
        let stride = match self.mode {
            CipherMode::RandomDelta => 2 * self.block_size,
            _ => self.block_size,
        };

        let mut plaintext = Vec::with_capacity(ciphertext.len());
        let mut chaining = self.iv.clone();

        for (index, chunk) in ciphertext.chunks(stride).enumerate() {
            match self.mode {
                CipherMode::ECB => {
                    plaintext.extend_from_slice(&self.cipher_decrypt(chunk, index)?);
                }
                CipherMode::CBC => {
                    let decrypted = self.cipher_decrypt(chunk, index)?;
                    plaintext.extend_from_slice(&xor_blocks(&decrypted, &chaining));
                    chaining = chunk.to_vec();
                }
                CipherMode::PCBC => {
                    let decrypted = self.cipher_decrypt(chunk, index)?;
                    let plain = xor_blocks(&decrypted, &chaining);
                    chaining = xor_blocks(&plain, chunk);
                    plaintext.extend_from_slice(&plain);
                }
                CipherMode::CFB => {
                    let keystream = self.cipher_encrypt(&chaining, index)?;
                    plaintext.extend_from_slice(&xor_blocks(&keystream, chunk));
                    chaining = chunk.to_vec();
                }
                CipherMode::OFB => {
                    chaining = self.cipher_encrypt(&chaining, index)?;
                    plaintext.extend_from_slice(&xor_blocks(&chaining, chunk));
                }
                CipherMode::CTR => {
                    let keystream = self.cipher_encrypt(&chaining, index)?;
                    plaintext.extend_from_slice(&xor_blocks(&keystream, chunk));
                    increment_counter(&mut chaining);
                }
                CipherMode::RandomDelta => {
                    let (delta, block) = chunk.split_at(self.block_size);
                    let decrypted = self.cipher_decrypt(block, index)?;
                    plaintext.extend_from_slice(&xor_blocks(&decrypted, delta));
                }
            }
        }

        Ok(plaintext)
    }

    fn worker_partition(&self, num_blocks: usize) -> (usize, usize) {
        let num_workers = available_parallelism()
            .map(usize::from)
            .unwrap_or(4)
            .min(num_blocks);
        let blocks_per_worker = num_blocks.div_ceil(num_workers);
        (num_workers, blocks_per_worker)
    }

    /// ECB независим по блокам: данные режутся на непрерывные диапазоны,
    /// по диапазону на воркер; порядок результата определяется позицией
    /// диапазона, а не планировщиком.
    fn process_ecb_parallel(&self, data: &[u8], encrypt: bool) -> Result<Vec<u8>, CipherError> {
        let num_blocks = data.len() / self.block_size;
        if num_blocks == 0 {
            return Ok(Vec::new());
        }

        let (num_workers, blocks_per_worker) = self.worker_partition(num_blocks);
        debug!("ECB: {num_blocks} blocks across {num_workers} workers");

        let pieces: Result<Vec<Vec<u8>>, CipherError> = data
            .par_chunks(blocks_per_worker * self.block_size)
            .enumerate()
            .map(|(worker, chunk)| {
                let base = worker * blocks_per_worker;
                let mut out = Vec::with_capacity(chunk.len());
                for (offset, block) in chunk.chunks(self.block_size).enumerate() {
                    let processed = if encrypt {
                        self.cipher_encrypt(block, base + offset)?
                    } else {
                        self.cipher_decrypt(block, base + offset)?
                    };
                    out.extend_from_slice(&processed);
                }
                Ok(out)
            })
            .collect();

        Ok(pieces?.concat())
    }

    /// CTR: каждый воркер восстанавливает свой стартовый счётчик,
    /// инкрементируя копию IV на номер первого блока диапазона.
    /// Шифрование и расшифрование совпадают.
    fn process_ctr_parallel(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        let num_blocks = data.len() / self.block_size;
        if num_blocks == 0 {
            return Ok(Vec::new());
        }

        let (num_workers, blocks_per_worker) = self.worker_partition(num_blocks);
        debug!("CTR: {num_blocks} blocks across {num_workers} workers");

        let pieces: Result<Vec<Vec<u8>>, CipherError> = data
            .par_chunks(blocks_per_worker * self.block_size)
            .enumerate()
            .map(|(worker, chunk)| {
                let start_block = worker * blocks_per_worker;
                let mut counter = self.iv.clone();
                for _ in 0..start_block {
                    increment_counter(&mut counter);
                }

                let mut out = Vec::with_capacity(chunk.len());
                for (offset, block) in chunk.chunks(self.block_size).enumerate() {
                    let keystream = self.cipher_encrypt(&counter, start_block + offset)?;
                    out.extend_from_slice(&xor_blocks(&keystream, block));
                    increment_counter(&mut counter);
                }
                Ok(out)
            })
            .collect();

        Ok(pieces?.concat())
    }
}
