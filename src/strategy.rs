//! ディスパッチ戦略
//!
//! 各戦略は1ラウンドで対象コレクションの全要素をちょうど一度ずつ更新する

use crate::core::DispatchResult;
use crate::fixture::Fixture;
use crate::objects::UpCounter;
use crate::unswitch::Unswitcher;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// `Box<dyn Counter>` を vtable 経由で更新
    VirtualDispatch,
    /// 混在コレクションの全要素に Up の操作を静的に適用（種別を無視）
    MistypedStatic,
    /// `Box<UpCounter>` のみの同種コレクション
    StaticBoxed,
    /// 判別子ビットマップによる種別ごとの2回走査
    Unswitched,
    /// 連続配置された `UpCounter` のみの同種コレクション
    StaticInline,
    /// タグ付き列挙型を要素ごとに match
    TaggedMatch,
}

impl Strategy {
    /// レポートの表示順
    pub const ALL: [Strategy; 6] = [
        Strategy::VirtualDispatch,
        Strategy::MistypedStatic,
        Strategy::StaticBoxed,
        Strategy::Unswitched,
        Strategy::StaticInline,
        Strategy::TaggedMatch,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::VirtualDispatch => "virtual-dispatch",
            Self::MistypedStatic => "mistyped-static",
            Self::StaticBoxed => "static-boxed",
            Self::Unswitched => "unswitched",
            Self::StaticInline => "static-inline",
            Self::TaggedMatch => "tagged-match",
        }
    }

    /// 要素の種別に合った操作を呼ぶかどうか
    pub const fn is_kind_correct(self) -> bool {
        !matches!(self, Self::MistypedStatic)
    }

    /// 1ラウンド実行
    pub fn run_once(self, fixture: &mut Fixture, unswitcher: &Unswitcher) -> DispatchResult<()> {
        match self {
            Self::VirtualDispatch => {
                for object in fixture.virtual_objects_mut() {
                    object.update();
                }
            }
            Self::MistypedStatic => {
                for object in fixture.tagged_objects_mut() {
                    UpCounter::apply(object.raw_count_mut());
                }
            }
            Self::StaticBoxed => {
                for counter in fixture.boxed_up_mut() {
                    counter.update();
                }
            }
            Self::Unswitched => unswitcher.run(fixture.tagged_objects_mut())?,
            Self::StaticInline => {
                for counter in fixture.inline_up_mut() {
                    counter.update();
                }
            }
            Self::TaggedMatch => {
                for object in fixture.tagged_objects_mut() {
                    object.update();
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
