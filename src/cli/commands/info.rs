use crate::fixture::FixtureConfig;
use crate::objects::{Counter, DownCounter, Kind, Object, UpCounter};
use crate::unswitch::BLOCK_WIDTH;
use std::mem::{align_of, size_of};

/// 型のメモリレイアウト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeLayout {
    pub name: &'static str,
    pub size: usize,
    pub align: usize,
}

impl TypeLayout {
    fn of<T>(name: &'static str) -> Self {
        Self {
            name,
            size: size_of::<T>(),
            align: align_of::<T>(),
        }
    }
}

pub fn layout_report() -> Vec<TypeLayout> {
    vec![
        TypeLayout::of::<Kind>("Kind"),
        TypeLayout::of::<UpCounter>("UpCounter"),
        TypeLayout::of::<DownCounter>("DownCounter"),
        TypeLayout::of::<Object>("Object"),
        TypeLayout::of::<Box<UpCounter>>("Box<UpCounter>"),
        TypeLayout::of::<Box<dyn Counter>>("Box<dyn Counter>"),
    ]
}

/// Execute info command
pub fn execute_info() {
    println!("📐 Object layouts");
    for layout in layout_report() {
        println!(
            "   {:<18} size = {:>2}  align = {:>2}",
            layout.name, layout.size, layout.align
        );
    }

    let len = FixtureConfig::DEFAULT_LEN;
    println!(
        "🧮 Default fixture: {len} objects, bitmap of {} blocks ({} bytes)",
        len.div_ceil(BLOCK_WIDTH),
        len.div_ceil(BLOCK_WIDTH) * size_of::<u64>()
    );
}
