//! 計測対象のオブジェクト
//!
//! 同じ2種類のカウンタを3通りの形で表現する:
//! - `Box<dyn Counter>`: 動的ディスパッチ（vtable 経由）
//! - `Object`: 閉じたタグ付き列挙型（判別子で分岐）
//! - `UpCounter` / `DownCounter`: 具象型そのもの（静的ディスパッチ）

pub mod counters;

pub use counters::{DownCounter, UpCounter};

use crate::core::{DispatchError, DispatchResult};

/// オブジェクトの種別。値は判別子（ビットマップの 1 ビット）そのもの
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Up = 0,
    Down = 1,
}

impl Kind {
    /// 判別子から種別を復元
    pub fn from_discriminant(value: u8) -> DispatchResult<Self> {
        match value {
            0 => Ok(Self::Up),
            1 => Ok(Self::Down),
            other => Err(DispatchError::invalid_discriminant(other)),
        }
    }

    #[inline]
    pub const fn discriminant(self) -> u8 {
        self as u8
    }
}

/// 動的ディスパッチ用の共通インターフェース
pub trait Counter {
    fn kind(&self) -> Kind;

    fn update(&mut self);

    fn count(&self) -> i32;
}

/// アンスイッチ処理が要求するインターフェース
///
/// `update_up` は種別 Up の要素に対してのみ、`update_down` は種別 Down の要素に対してのみ呼ばれる
pub trait Unswitch {
    fn kind(&self) -> Kind;

    fn update_up(&mut self);

    fn update_down(&mut self);
}

/// タグ付き列挙型としてのオブジェクト
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Object {
    Up(UpCounter),
    Down(DownCounter),
}

impl Object {
    pub fn new(kind: Kind) -> Self {
        match kind {
            Kind::Up => Self::Up(UpCounter::new()),
            Kind::Down => Self::Down(DownCounter::new()),
        }
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        match self {
            Self::Up(_) => Kind::Up,
            Self::Down(_) => Kind::Down,
        }
    }

    /// 要素ごとに判別子で分岐する更新
    #[inline]
    pub fn update(&mut self) {
        match self {
            Self::Up(counter) => counter.update(),
            Self::Down(counter) => counter.update(),
        }
    }

    pub fn count(&self) -> i32 {
        match self {
            Self::Up(counter) => counter.count(),
            Self::Down(counter) => counter.count(),
        }
    }

    /// 種別に関係なく共通レイアウトの状態を取得
    #[inline]
    pub fn raw_count_mut(&mut self) -> &mut i32 {
        match self {
            Self::Up(counter) => counter.count_mut(),
            Self::Down(counter) => counter.count_mut(),
        }
    }

    /// 同じ種別の動的ディスパッチ版を作成
    pub fn to_virtual(&self) -> Box<dyn Counter> {
        match self {
            Self::Up(counter) => Box::new(*counter),
            Self::Down(counter) => Box::new(*counter),
        }
    }
}

impl Unswitch for Object {
    #[inline]
    fn kind(&self) -> Kind {
        Object::kind(self)
    }

    #[inline]
    fn update_up(&mut self) {
        debug_assert_eq!(Object::kind(self), Kind::Up);
        if let Self::Up(counter) = self {
            counter.update();
        }
    }

    #[inline]
    fn update_down(&mut self) {
        debug_assert_eq!(Object::kind(self), Kind::Down);
        if let Self::Down(counter) = self {
            counter.update();
        }
    }
}
