// アンスイッチの性質に関する統合テスト
use dispatch_bench::{
    unswitch, DiscriminantBitmap, DispatchError, Kind, LengthPolicy, Object, PassOrder, Unswitch,
    Unswitcher,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 操作ごとの呼び出し回数を数えるテスト用要素
#[derive(Debug, Clone, PartialEq, Eq)]
struct CallCounter {
    kind: Kind,
    up_calls: u32,
    down_calls: u32,
}

impl CallCounter {
    fn new(kind: Kind) -> Self {
        Self {
            kind,
            up_calls: 0,
            down_calls: 0,
        }
    }
}

impl Unswitch for CallCounter {
    fn kind(&self) -> Kind {
        self.kind
    }

    fn update_up(&mut self) {
        self.up_calls += 1;
    }

    fn update_down(&mut self) {
        self.down_calls += 1;
    }
}

fn random_kinds(rng: &mut StdRng, len: usize, up_probability: f64) -> Vec<Kind> {
    (0..len)
        .map(|_| {
            if rng.gen_bool(up_probability) {
                Kind::Up
            } else {
                Kind::Down
            }
        })
        .collect()
}

#[test]
fn test_every_element_updated_exactly_once_with_own_operation() {
    let mut rng = StdRng::seed_from_u64(0xD15_BA7C);

    for blocks in 1..=8 {
        for up_probability in [0.0, 0.05, 0.5, 0.95, 1.0] {
            let kinds = random_kinds(&mut rng, blocks * 64, up_probability);
            let mut items: Vec<CallCounter> = kinds.iter().map(|k| CallCounter::new(*k)).collect();

            unswitch(&mut items).unwrap();

            for item in &items {
                match item.kind {
                    Kind::Up => assert_eq!((item.up_calls, item.down_calls), (1, 0)),
                    Kind::Down => assert_eq!((item.up_calls, item.down_calls), (0, 1)),
                }
            }
        }
    }
}

#[test]
fn test_bitmap_rebuild_is_identical() {
    let mut rng = StdRng::seed_from_u64(11);
    let kinds = random_kinds(&mut rng, 4096, 0.5);

    let first = DiscriminantBitmap::from_kinds(&kinds);
    let second = DiscriminantBitmap::from_kinds(&kinds);

    assert_eq!(first, second);
    assert_eq!(first.block_count(), 64);
}

#[test]
fn test_pass_order_does_not_change_final_state() {
    let mut rng = StdRng::seed_from_u64(23);
    let kinds = random_kinds(&mut rng, 1024, 0.3);
    let mut up_first: Vec<Object> = kinds.iter().map(|k| Object::new(*k)).collect();
    let mut down_first = up_first.clone();

    Unswitcher::new()
        .with_order(PassOrder::UpFirst)
        .run(&mut up_first)
        .unwrap();
    Unswitcher::new()
        .with_order(PassOrder::DownFirst)
        .run(&mut down_first)
        .unwrap();

    assert_eq!(up_first, down_first);
}

#[test]
fn test_all_up_block_only_runs_up_pass() {
    let bitmap = DiscriminantBitmap::from_kinds(&[Kind::Up; 64]);
    assert_eq!(bitmap.indices_of(Kind::Up).count(), 64);
    assert_eq!(bitmap.indices_of(Kind::Down).count(), 0);

    let mut items = vec![CallCounter::new(Kind::Up); 64];
    unswitch(&mut items).unwrap();
    assert!(items.iter().all(|item| item.up_calls == 1 && item.down_calls == 0));
}

#[test]
fn test_all_down_block_only_runs_down_pass() {
    let bitmap = DiscriminantBitmap::from_kinds(&[Kind::Down; 64]);
    assert_eq!(bitmap.indices_of(Kind::Up).count(), 0);
    assert_eq!(bitmap.indices_of(Kind::Down).count(), 64);

    let mut items = vec![CallCounter::new(Kind::Down); 64];
    unswitch(&mut items).unwrap();
    assert!(items.iter().all(|item| item.up_calls == 0 && item.down_calls == 1));
}

#[test]
fn test_alternating_kinds_visit_in_ascending_order() {
    let kinds: Vec<Kind> = (0..128)
        .map(|i| if i % 2 == 0 { Kind::Up } else { Kind::Down })
        .collect();
    let bitmap = DiscriminantBitmap::from_kinds(&kinds);

    let ups: Vec<usize> = bitmap.indices_of(Kind::Up).collect();
    let downs: Vec<usize> = bitmap.indices_of(Kind::Down).collect();

    assert_eq!(ups, (0..128).filter(|i| i % 2 == 0).collect::<Vec<_>>());
    assert_eq!(downs, (0..128).filter(|i| i % 2 == 1).collect::<Vec<_>>());
}

#[test]
fn test_unaligned_length_is_rejected_without_updates() {
    let mut items: Vec<Object> = (0..100)
        .map(|i| Object::new(if i % 2 == 0 { Kind::Up } else { Kind::Down }))
        .collect();

    let error = unswitch(&mut items).unwrap_err();

    assert!(matches!(
        error,
        DispatchError::InvalidLength {
            len: 100,
            block_width: 64
        }
    ));
    assert!(items.iter().all(|object| object.count() == 0));
}

#[test]
fn test_masked_trailing_block_updates_each_element_once() {
    let mut rng = StdRng::seed_from_u64(5);
    for len in [1, 63, 65, 100, 127, 200] {
        let kinds = random_kinds(&mut rng, len, 0.5);
        let mut items: Vec<CallCounter> = kinds.iter().map(|k| CallCounter::new(*k)).collect();

        Unswitcher::new()
            .with_policy(LengthPolicy::MaskTrailing)
            .run(&mut items)
            .unwrap();

        for item in &items {
            assert_eq!(item.up_calls + item.down_calls, 1, "len {len}");
        }
    }
}
