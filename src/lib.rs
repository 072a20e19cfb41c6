//! 動的ディスパッチ・静的ディスパッチ・アンスイッチの性能比較
//!
//! 2種類のカウンタが混在するコレクションに対して、要素ごとの更新操作を
//! どのように呼び出すかで生じるコストの差を測定する。
//! 中心となるのは [`unswitch`] の種別分類アンスイッチで、判別子ビットマップを一度構築し、
//! 種別ごとに1回ずつ走査することで要素ごとのディスパッチを取り除く。

pub mod benchmarks;
pub mod cli;
pub mod core;
pub mod fixture;
pub mod objects;
pub mod services;
pub mod strategy;
pub mod unswitch;

pub use crate::core::{DispatchError, DispatchResult};
pub use fixture::{Fixture, FixtureConfig};
pub use objects::{Counter, DownCounter, Kind, Object, Unswitch, UpCounter};
pub use strategy::Strategy;
pub use unswitch::{unswitch, DiscriminantBitmap, LengthPolicy, PassOrder, SetBits, Unswitcher};
