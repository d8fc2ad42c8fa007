/*
 * Canonical Huffman table construction.
 *
 * Builds the per-length histogram / first-code / offset bookkeeping that
 * both the LSB and MSB builders share (grounded in the teacher's
 * `build_decode_table` in `decompress_utils.rs`, which performs the same
 * counting-sort-style pass over `len_counts[]` before specialising into
 * table/subtable fill); only the fast-table materialisation differs
 * between bit orders, exactly as the Design Notes call out.
 */

use crate::bitreverse::{rev8, rev8_full};
use crate::error::BuildError;
use crate::table::{
    Extra, FastEntry, FastExtEntry, Table, TableExt, FAST_BITS, FAST_SIZE, MAX_CODE_LENGTH,
    MAX_SYMBOLS,
};
use crate::unchecked::UncheckedArray;
use nightly_quirks::branch_pred::unlikely;

struct CanonicalStats {
    /// `first_code[l]`: the first (MSB-natural) codeword of length `l`.
    first_code: [u32; MAX_CODE_LENGTH + 1],
    /// `count[l]`: number of symbols with length `l` (`count[0]` = unused
    /// symbols).
    count: [u32; MAX_CODE_LENGTH + 1],
    /// Exclusive upper bound on the code value at length `l`.
    sentinels: [u32; MAX_CODE_LENGTH + 1],
    /// `syms[]` index bias at length `l`.
    offsets: [i32; MAX_CODE_LENGTH + 1],
    /// Total symbols actually used (nonzero length).
    num_used: usize,
    /// Fraction of the `2^MAX_CODE_LENGTH` codespace the lengths claim.
    codespace_used: u32,
}

fn canonical_stats(lengths: &[u8]) -> Result<CanonicalStats, BuildError> {
    if unlikely(lengths.len() > MAX_SYMBOLS) {
        return Err(BuildError::TooManySymbols {
            supplied: lengths.len(),
            capacity: MAX_SYMBOLS,
        });
    }

    let mut count = [0u32; MAX_CODE_LENGTH + 1];
    for (i, &len) in lengths.iter().enumerate() {
        if unlikely(len as usize > MAX_CODE_LENGTH) {
            return Err(BuildError::InvalidLength { symbol: i, length: len });
        }
        count[len as usize] += 1;
    }

    let mut first_code = [0u32; MAX_CODE_LENGTH + 1];
    let mut sym_idx = [0u32; MAX_CODE_LENGTH + 1];
    let mut sentinels = [0u32; MAX_CODE_LENGTH + 1];
    let mut offsets = [0i32; MAX_CODE_LENGTH + 1];
    let mut codespace_used: u32 = 0;

    for len in 1..=MAX_CODE_LENGTH {
        if len > 1 {
            first_code[len] = (first_code[len - 1] + count[len - 1]) << 1;
            sym_idx[len] = sym_idx[len - 1] + count[len - 1];
        }
        sentinels[len] = first_code[len] + count[len];
        offsets[len] = sym_idx[len] as i32 - first_code[len] as i32;
        codespace_used = (codespace_used << 1) + count[len];
    }

    let num_used = lengths.len() - count[0] as usize;

    Ok(CanonicalStats {
        first_code,
        count,
        sentinels,
        offsets,
        num_used,
        codespace_used,
    })
}

/// `strict`'s incomplete-code tolerance: an empty code, or exactly one
/// length-1 symbol. Matches the two cases the teacher's own comment in
/// `build_decode_table` documents as what zlib tolerates.
fn is_tolerated_incomplete(stats: &CanonicalStats) -> bool {
    stats.codespace_used == 0
        || (stats.codespace_used == (1u32 << (MAX_CODE_LENGTH - 1)) && stats.count[1] == 1)
}

fn check_strict(stats: &CanonicalStats, strict: bool) -> Result<(), BuildError> {
    if !strict {
        return Ok(());
    }
    let full = 1u32 << MAX_CODE_LENGTH;
    if stats.codespace_used > full {
        return Err(BuildError::OverSubscribed);
    }
    if stats.codespace_used < full && !is_tolerated_incomplete(stats) {
        return Err(BuildError::Incomplete);
    }
    Ok(())
}

fn resolve_symbol(i: usize, alphabet: Option<&[u16]>) -> u16 {
    match alphabet {
        Some(a) => a[i],
        None => i as u16,
    }
}

/// Builds a plain LSB-first decode table (DEFLATE, HPACK bit order).
pub fn build_lsb(
    lengths: &[u8],
    alphabet: Option<&[u16]>,
    strict: bool,
) -> Result<Table, BuildError> {
    let stats = canonical_stats(lengths)?;
    check_strict(&stats, strict)?;

    let mut syms = vec![0u16; stats.num_used];
    let mut fast: UncheckedArray<FastEntry, FAST_SIZE> = UncheckedArray::default();
    let mut running_code = stats.first_code;

    for (i, &len) in lengths.iter().enumerate() {
        let len = len as usize;
        if len == 0 {
            continue;
        }
        let sym = resolve_symbol(i, alphabet);
        let code = running_code[len];
        let pos = (stats.offsets[len] + code as i32) as usize;
        syms[pos] = sym;

        if len <= FAST_BITS {
            let idx_base = rev8((code as u8) & ((1u16 << len) - 1) as u8, len as u8) as usize;
            let pad_count = 1usize << (FAST_BITS - len);
            for pad in 0..pad_count {
                fast[idx_base | (pad << len)] = FastEntry { len: len as u8, sym, rev: 0 };
            }
        }
        running_code[len] += 1;
    }

    for i in 0..FAST_SIZE {
        if fast[i].len == 0 {
            fast[i].rev = rev8_full(i as u8);
        }
    }

    Ok(Table {
        fast,
        sentinels: stats.sentinels,
        offsets: stats.offsets,
        syms,
    })
}

/// Builds a plain MSB-first decode table (JPEG bit order).
pub fn build_msb(
    lengths: &[u8],
    alphabet: Option<&[u16]>,
    strict: bool,
) -> Result<Table, BuildError> {
    let stats = canonical_stats(lengths)?;
    check_strict(&stats, strict)?;

    let mut syms = vec![0u16; stats.num_used];
    let mut fast: UncheckedArray<FastEntry, FAST_SIZE> = UncheckedArray::default();
    let mut running_code = stats.first_code;

    for (i, &len) in lengths.iter().enumerate() {
        let len = len as usize;
        if len == 0 {
            continue;
        }
        let sym = resolve_symbol(i, alphabet);
        let code = running_code[len];
        let pos = (stats.offsets[len] + code as i32) as usize;
        syms[pos] = sym;

        if len <= FAST_BITS {
            let idx_base = (code as usize) << (FAST_BITS - len);
            let run = 1usize << (FAST_BITS - len);
            for idx in idx_base..idx_base + run {
                fast[idx] = FastEntry { len: len as u8, sym, rev: 0 };
            }
        }
        running_code[len] += 1;
    }

    // The MSB slow path reconstructs the code directly from a top-aligned
    // window (see decode.rs) rather than bit-by-bit reversal, so `rev` is
    // unused here; left zeroed.

    Ok(Table {
        fast,
        sentinels: stats.sentinels,
        offsets: stats.offsets,
        syms,
    })
}

fn extra_for(sym: u16, offset: u16, extras: &[Extra]) -> Extra {
    if sym < offset {
        return Extra { base: 0, bits: 0 };
    }
    let idx = (sym - offset) as usize;
    extras.get(idx).copied().unwrap_or(Extra { base: 0, bits: 0 })
}

/// Builds an LSB-first extended table: a fast hit yields the symbol's base
/// value plus its immediately-following extra bits in one call.
pub fn build_lsb_ext(
    lengths: &[u8],
    alphabet: Option<&[u16]>,
    extras: &[Extra],
    offset: u16,
    strict: bool,
) -> Result<TableExt, BuildError> {
    let stats = canonical_stats(lengths)?;
    check_strict(&stats, strict)?;

    let mut syms = vec![0u16; stats.num_used];
    let mut fast: UncheckedArray<FastExtEntry, FAST_SIZE> = UncheckedArray::default();
    let mut running_code = stats.first_code;

    for (i, &len) in lengths.iter().enumerate() {
        let len = len as usize;
        if len == 0 {
            continue;
        }
        let sym = resolve_symbol(i, alphabet);
        let code = running_code[len];
        let pos = (stats.offsets[len] + code as i32) as usize;
        syms[pos] = sym;

        if len <= FAST_BITS {
            let ext = extra_for(sym, offset, extras);
            let idx_base = rev8((code as u8) & ((1u16 << len) - 1) as u8, len as u8) as usize;
            let pad_count = 1usize << (FAST_BITS - len);
            let mask = if ext.bits == 0 { 0 } else { (1u32 << ext.bits) - 1 };
            for pad in 0..pad_count {
                fast[idx_base | (pad << len)] = FastExtEntry {
                    len: len as u8,
                    sym,
                    rev: 0,
                    base: ext.base,
                    mask,
                    total_len: len as u8 + ext.bits,
                };
            }
        }
        running_code[len] += 1;
    }

    for i in 0..FAST_SIZE {
        if fast[i].len == 0 {
            fast[i].rev = rev8_full(i as u8);
        }
    }

    Ok(TableExt {
        fast,
        sentinels: stats.sentinels,
        offsets: stats.offsets,
        syms,
        extras: extras.to_vec(),
        offset,
    })
}

/// Builds an MSB-first extended table. The source left whether MSB should
/// support extra bits undecided; this spec resolves it by allowing it
/// (see `SPEC_FULL.md` Open Questions).
pub fn build_msb_ext(
    lengths: &[u8],
    alphabet: Option<&[u16]>,
    extras: &[Extra],
    offset: u16,
    strict: bool,
) -> Result<TableExt, BuildError> {
    let stats = canonical_stats(lengths)?;
    check_strict(&stats, strict)?;

    let mut syms = vec![0u16; stats.num_used];
    let mut fast: UncheckedArray<FastExtEntry, FAST_SIZE> = UncheckedArray::default();
    let mut running_code = stats.first_code;

    for (i, &len) in lengths.iter().enumerate() {
        let len = len as usize;
        if len == 0 {
            continue;
        }
        let sym = resolve_symbol(i, alphabet);
        let code = running_code[len];
        let pos = (stats.offsets[len] + code as i32) as usize;
        syms[pos] = sym;

        if len <= FAST_BITS {
            let ext = extra_for(sym, offset, extras);
            let idx_base = (code as usize) << (FAST_BITS - len);
            let run = 1usize << (FAST_BITS - len);
            let mask = if ext.bits == 0 { 0 } else { (1u32 << ext.bits) - 1 };
            for idx in idx_base..idx_base + run {
                fast[idx] = FastExtEntry {
                    len: len as u8,
                    sym,
                    rev: 0,
                    base: ext.base,
                    mask,
                    total_len: len as u8 + ext.bits,
                };
            }
        }
        running_code[len] += 1;
    }

    Ok(TableExt {
        fast,
        sentinels: stats.sentinels,
        offsets: stats.offsets,
        syms,
        extras: extras.to_vec(),
        offset,
    })
}
