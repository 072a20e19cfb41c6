//! 立っているビット位置を昇順に列挙するイテレータ

use std::iter::FusedIterator;

/// ワード内の立っているビット位置を下位から順に返す
///
/// `Copy` なので、途中の状態を複製すればそこから再開できる
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetBits {
    word: u64,
    base: usize,
}

impl SetBits {
    pub const fn new(word: u64) -> Self {
        Self { word, base: 0 }
    }

    /// 返す位置に `base` を加算する（ブロック先頭の絶対インデックス）
    pub const fn with_base(word: u64, base: usize) -> Self {
        Self { word, base }
    }

    /// 未消費のビット
    pub const fn remaining_word(&self) -> u64 {
        self.word
    }
}

impl Iterator for SetBits {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.word == 0 {
            return None;
        }
        let bit = self.word.trailing_zeros() as usize;
        self.word &= self.word - 1;
        Some(self.base + bit)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.word.count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SetBits {}

impl FusedIterator for SetBits {}
