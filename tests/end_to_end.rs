use canon_huffman::{
    build_lsb, build_lsb_ext, build_msb, decode_lsb, decode_lsb_ext, decode_msb, read, BitCursor,
    BuildError, Extra, SENTINEL,
};

#[test]
fn minimal_four_symbol_table_decodes_in_sequence() {
    let lengths = [2u8, 2, 2, 2];
    let table = build_lsb(&lengths, None, false).unwrap();

    let mut bits = 0b0001_1011u64;
    for (sym, used) in [(0u16, 2u32), (2, 2), (1, 2), (3, 2)] {
        let (s, u) = decode_lsb(&table, bits, 8);
        assert_eq!((s, u), (sym, used));
        bits >>= u;
    }
}

#[test]
fn deflate_fixed_literal_table_decodes_end_of_block() {
    let mut lengths = [0u8; 288];
    lengths[0..144].fill(8);
    lengths[144..256].fill(9);
    lengths[256..280].fill(7);
    lengths[280..288].fill(8);
    let table = build_lsb(&lengths, None, false).unwrap();

    let (sym, used) = decode_lsb(&table, 0, 16);
    assert_eq!((sym, used), (256, 7));
}

#[test]
fn extended_table_folds_extra_bits_into_the_value() {
    let mut lengths = vec![0u8; 266];
    lengths[265] = 6;
    let extras = vec![Extra { base: 11, bits: 1 }];
    let table = build_lsb_ext(&lengths, None, &extras, 265, false).unwrap();

    let bits = 0b1_000000u64;
    let (value, used) = decode_lsb_ext(&table, bits, 8);
    assert_eq!(value, 12);
    assert_eq!(used, 7);
}

#[test]
fn incomplete_table_fails_closed_on_the_unused_code() {
    let lengths = [1u8, 0, 0];
    let table = build_lsb(&lengths, None, false).unwrap();

    assert_eq!(decode_lsb(&table, 0, 8), (0, 1));
    assert_eq!(decode_lsb(&table, 1, 8), (SENTINEL, 0));
}

#[test]
fn oversized_length_is_rejected_at_build_time() {
    let lengths = [17u8, 1, 1];
    let err = build_lsb(&lengths, None, false).unwrap_err();
    assert_eq!(err, BuildError::InvalidLength { symbol: 0, length: 17 });
}

#[test]
fn bit_reader_crosses_a_byte_boundary() {
    let buf = [0xABu8, 0xCD];
    let cursor = BitCursor { byte_ptr: 0, bit_in_byte: 5 };
    let (word, nbits) = read(cursor, &buf);
    assert_eq!(nbits, 11);
    assert_eq!(word & 0x7FF, 0x65D);
}

#[test]
fn a_full_byte_stream_decodes_end_to_end_via_the_cursor() {
    // Three symbols packed back to back, LSB-first, from a fresh table
    // shared across the whole decode -- exercises the BitCursor lifecycle
    // (advance-by-used) rather than a single isolated decode call.
    let lengths = [1u8, 2, 3, 3];
    let table = build_lsb(&lengths, None, false).unwrap();

    // sym0 = "0" (1 bit), sym1 = "10" (2 bits), sym2 = "110" (3 bits),
    // sym3 = "111" (3 bits). Encode sym0, sym1, sym3: 0 | 01 | 111.
    // LSB-packed byte, lowest bit first: bit0=0 (sym0), bits1-2=01->"10"
    // reversed on read back through decode_lsb (LSB consumes low bits
    // first, codeword bits appended in natural order), bits3-5=111 (sym3).
    let byte = 0b0_111_01_0u8;
    let buf = [byte];
    let mut cursor = BitCursor::new();

    let mut decoded = Vec::new();
    for _ in 0..3 {
        let (word, nbits) = read(cursor, &buf);
        let (sym, used) = decode_lsb(&table, word, nbits);
        assert_ne!(used, 0, "unexpected decode failure at {cursor:?}");
        decoded.push(sym);
        cursor.advance(used);
    }

    assert_eq!(decoded, vec![0, 1, 3]);
}

#[test]
fn lsb_and_msb_tables_built_from_the_same_lengths_agree_under_bit_reversal() {
    use canon_huffman::{rev8, FAST_BITS};

    let lengths = [2u8, 2, 2, 2];
    let lsb_table = build_lsb(&lengths, None, false).unwrap();
    let msb_table = build_msb(&lengths, None, false).unwrap();

    for raw in 0u32..16 {
        let (lsb_sym, lsb_used) = decode_lsb(&lsb_table, raw as u64, 4);
        let msb_bits = (rev8(raw as u8, 4) as u32) << 24;
        let (msb_sym, msb_used) = decode_msb(&msb_table, msb_bits, 4);
        assert_eq!((lsb_sym, lsb_used), (msb_sym, msb_used));
    }

    assert!(lsb_table.num_symbols() == 4 && FAST_BITS == 8);
}
