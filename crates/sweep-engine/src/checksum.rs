//! Content checksums via streamed xxh3-128.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use xxhash_rust::xxh3::Xxh3;

const CHUNK_SIZE: usize = 64 * 1024;

/// Compute the xxh3 128-bit digest of a file's content.
///
/// Streams in 64 KiB chunks so files of unbounded size never load
/// wholly into memory.
pub fn checksum_file(path: &Path) -> io::Result<u128> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut hasher = Xxh3::new();
    let mut chunk = [0u8; CHUNK_SIZE];
    loop {
        let read = reader.read(&mut chunk)?;
        if read == 0 {
            break;
        }
        hasher.update(&chunk[..read]);
    }
    Ok(hasher.digest128())
}
