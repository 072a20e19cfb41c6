//! 種別分類によるアンスイッチ
//!
//! 要素ごとのディスパッチを、判別子ビットマップの構築と種別ごとの2回の走査に置き換える。
//! 各走査は1種類の具象操作しか呼ばないため、ループ内の分岐が完全に予測可能になる。

pub mod bitmap;
pub mod set_bits;

pub use bitmap::{DiscriminantBitmap, BLOCK_WIDTH};
pub use set_bits::SetBits;

use crate::core::{DispatchError, DispatchResult};
use crate::objects::{Kind, Unswitch};
use serde::{Deserialize, Serialize};

/// ブロック幅の倍数でない要素数の扱い
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LengthPolicy {
    /// 倍数でなければ即座に失敗する
    #[default]
    Strict,
    /// 末尾の不完全ブロックの範囲外ビットを両方の走査から除外する
    MaskTrailing,
}

/// 2つの走査の実行順序
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PassOrder {
    #[default]
    UpFirst,
    DownFirst,
}

impl PassOrder {
    pub const fn kinds(self) -> [Kind; 2] {
        match self {
            Self::UpFirst => [Kind::Up, Kind::Down],
            Self::DownFirst => [Kind::Down, Kind::Up],
        }
    }
}

/// アンスイッチ実行器
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unswitcher {
    policy: LengthPolicy,
    order: PassOrder,
}

impl Unswitcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: LengthPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_order(mut self, order: PassOrder) -> Self {
        self.order = order;
        self
    }

    pub fn policy(&self) -> LengthPolicy {
        self.policy
    }

    pub fn order(&self) -> PassOrder {
        self.order
    }

    /// 要素数がポリシーに適合するか検証
    pub fn check_len(&self, len: usize) -> DispatchResult<()> {
        match self.policy {
            LengthPolicy::Strict if len % BLOCK_WIDTH != 0 => {
                Err(DispatchError::invalid_length(len, BLOCK_WIDTH))
            }
            _ => Ok(()),
        }
    }

    /// 全要素を、それぞれの種別の操作でちょうど一度ずつ更新する
    ///
    /// 長さ検証に失敗した場合はどの要素にも触れない
    pub fn run<T: Unswitch>(&self, items: &mut [T]) -> DispatchResult<()> {
        self.check_len(items.len())?;

        let bitmap = DiscriminantBitmap::build(items, |item| item.kind());
        for kind in self.order.kinds() {
            sweep(items, &bitmap, kind);
        }
        Ok(())
    }
}

/// デフォルト設定（Strict, UpFirst）でアンスイッチを実行
pub fn unswitch<T: Unswitch>(items: &mut [T]) -> DispatchResult<()> {
    Unswitcher::default().run(items)
}

fn sweep<T: Unswitch>(items: &mut [T], bitmap: &DiscriminantBitmap, kind: Kind) {
    match kind {
        Kind::Up => {
            for index in bitmap.indices_of(Kind::Up) {
                items[index].update_up();
            }
        }
        Kind::Down => {
            for index in bitmap.indices_of(Kind::Down) {
                items[index].update_down();
            }
        }
    }
}
