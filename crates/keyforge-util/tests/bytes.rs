// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod xor_into_tests {
    use keyforge_util::xor_into;

    #[test]
    fn test_xor_equal_lengths() {
        let mut dst = [0x0f, 0xf0, 0xaa];
        xor_into(&mut dst, &[0xff, 0xff, 0xaa]);
        assert_eq!(dst, [0xf0, 0x0f, 0x00]);
    }

    #[test]
    fn test_xor_shorter_source_leaves_tail() {
        let mut dst = [1u8, 2, 3, 4];
        xor_into(&mut dst, &[1, 2]);
        assert_eq!(dst, [0, 0, 3, 4]);
    }
}

#[cfg(test)]
mod is_slice_zeroized_tests {
    use keyforge_util::is_slice_zeroized;

    #[test]
    fn test_zeroed() {
        assert!(is_slice_zeroized(&[0u8; 16]));
        assert!(is_slice_zeroized(&[]));
    }

    #[test]
    fn test_not_zeroed() {
        assert!(!is_slice_zeroized(&[0, 0, 1, 0]));
    }
}

#[cfg(test)]
mod hex_to_bytes_tests {
    use keyforge_util::hex_to_bytes;

    #[test]
    fn test_basic_hex() {
        assert_eq!(hex_to_bytes("deadbeef"), vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_uppercase() {
        assert_eq!(hex_to_bytes("ABCDEF"), vec![0xab, 0xcd, 0xef]);
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(hex_to_bytes(""), Vec::<u8>::new());
    }

    #[test]
    #[should_panic]
    fn test_invalid_hex_char() {
        hex_to_bytes("gg");
    }

    #[test]
    #[should_panic]
    fn test_odd_length() {
        hex_to_bytes("abc");
    }
}
