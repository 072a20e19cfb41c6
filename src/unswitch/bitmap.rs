//! 判別子ビットマップ
//!
//! 要素 `64 * j + i` の判別子がブロック `j` のビット `i` に入る。
//! 1 は種別 Down、0 は種別 Up を表す。末尾の不完全ブロックでは、範囲外のビットは常に 0。

use super::set_bits::SetBits;
use crate::objects::Kind;

/// 1ブロックあたりの要素数
pub const BLOCK_WIDTH: usize = u64::BITS as usize;

/// 要素列から一度だけ構築される判別子のビット表現
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscriminantBitmap {
    blocks: Vec<u64>,
    len: usize,
}

impl DiscriminantBitmap {
    /// 要素列を走査してビットマップを構築
    ///
    /// 各要素の種別は `kind_of` でちょうど一度だけ読まれる
    pub fn build<T, F>(items: &[T], mut kind_of: F) -> Self
    where
        F: FnMut(&T) -> Kind,
    {
        let mut blocks = Vec::with_capacity(items.len().div_ceil(BLOCK_WIDTH));
        let mut chunks = items.chunks_exact(BLOCK_WIDTH);

        for chunk in &mut chunks {
            let mut word = 0u64;
            // 4要素ずつ上位ビットに詰め、右シフトで下位へ送る
            for quad in chunk.chunks_exact(4) {
                word >>= 4;
                word |= (discriminant(&mut kind_of, &quad[0]) << 60)
                    | (discriminant(&mut kind_of, &quad[1]) << 61)
                    | (discriminant(&mut kind_of, &quad[2]) << 62)
                    | (discriminant(&mut kind_of, &quad[3]) << 63);
            }
            blocks.push(word);
        }

        let remainder = chunks.remainder();
        if !remainder.is_empty() {
            let word = remainder
                .iter()
                .enumerate()
                .fold(0u64, |word, (bit, item)| {
                    word | (discriminant(&mut kind_of, item) << bit)
                });
            blocks.push(word);
        }

        Self {
            blocks,
            len: items.len(),
        }
    }

    /// 種別の列から構築
    pub fn from_kinds(kinds: &[Kind]) -> Self {
        Self::build(kinds, |kind| *kind)
    }

    /// 対象要素数
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn blocks(&self) -> &[u64] {
        &self.blocks
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// 要素数がブロック幅の倍数かどうか
    pub fn is_block_aligned(&self) -> bool {
        self.len % BLOCK_WIDTH == 0
    }

    pub fn kind_at(&self, index: usize) -> Option<Kind> {
        if index >= self.len {
            return None;
        }
        let word = self.blocks[index / BLOCK_WIDTH];
        let bit = (word >> (index % BLOCK_WIDTH)) & 1;
        Some(if bit == 1 { Kind::Down } else { Kind::Up })
    }

    /// ブロック `block` のうち、指定種別の要素に対応するビットだけが立ったワード
    pub fn word_for(&self, block: usize, kind: Kind) -> u64 {
        let word = self.blocks[block];
        match kind {
            Kind::Down => word,
            Kind::Up => !word & self.valid_mask(block),
        }
    }

    /// 指定種別の要素インデックスを昇順に列挙
    pub fn indices_of(&self, kind: Kind) -> impl Iterator<Item = usize> + '_ {
        (0..self.blocks.len()).flat_map(move |block| {
            SetBits::with_base(self.word_for(block, kind), block * BLOCK_WIDTH)
        })
    }

    pub fn count_of(&self, kind: Kind) -> usize {
        (0..self.blocks.len())
            .map(|block| self.word_for(block, kind).count_ones() as usize)
            .sum()
    }

    fn valid_mask(&self, block: usize) -> u64 {
        let start = block * BLOCK_WIDTH;
        let valid = (self.len - start).min(BLOCK_WIDTH);
        if valid == BLOCK_WIDTH {
            u64::MAX
        } else {
            (1u64 << valid) - 1
        }
    }
}

#[inline]
fn discriminant<T, F>(kind_of: &mut F, item: &T) -> u64
where
    F: FnMut(&T) -> Kind,
{
    u64::from(kind_of(item).discriminant())
}
