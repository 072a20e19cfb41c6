//! 具象カウンタ型
//!
//! どちらも i32 一つだけを持つ repr(transparent) 型で、状態のレイアウトが一致する

use super::{Counter, Kind};

/// 種別 Up: 更新ごとに +1
#[repr(transparent)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UpCounter {
    count: i32,
}

impl UpCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 状態に対して Up の更新を直接適用する（静的ディスパッチ）
    #[inline]
    pub fn apply(count: &mut i32) {
        *count = count.wrapping_add(1);
    }

    #[inline]
    pub fn update(&mut self) {
        Self::apply(&mut self.count);
    }

    pub fn count(&self) -> i32 {
        self.count
    }

    pub(crate) fn count_mut(&mut self) -> &mut i32 {
        &mut self.count
    }
}

/// 種別 Down: 更新ごとに -1
#[repr(transparent)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DownCounter {
    count: i32,
}

impl DownCounter {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn apply(count: &mut i32) {
        *count = count.wrapping_sub(1);
    }

    #[inline]
    pub fn update(&mut self) {
        Self::apply(&mut self.count);
    }

    pub fn count(&self) -> i32 {
        self.count
    }

    pub(crate) fn count_mut(&mut self) -> &mut i32 {
        &mut self.count
    }
}

impl Counter for UpCounter {
    fn kind(&self) -> Kind {
        Kind::Up
    }

    fn update(&mut self) {
        UpCounter::update(self)
    }

    fn count(&self) -> i32 {
        self.count
    }
}

impl Counter for DownCounter {
    fn kind(&self) -> Kind {
        Kind::Down
    }

    fn update(&mut self) {
        DownCounter::update(self)
    }

    fn count(&self) -> i32 {
        self.count
    }
}
