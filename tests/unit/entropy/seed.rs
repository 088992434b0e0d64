use super::*;
use crate::entropy::context::EntropyInput;
use crate::traits::model::{Category, Rarity};

#[test]
fn same_traits_same_seed() {
    let t = TraitDescriptor::default();
    assert_eq!(render_seed(&t, None), render_seed(&t.clone(), None));
}

#[test]
fn traits_drive_seed_without_chain_data() {
    let a = TraitDescriptor::default();
    let b = TraitDescriptor {
        rarity: Rarity::Epic,
        ..TraitDescriptor::default()
    };
    assert_ne!(render_seed(&a, None), render_seed(&b, None));

    let state_only = EntropyContext::from_input(&EntropyInput::default().with_quantum_state("observed"));
    assert_eq!(render_seed(&a, Some(&state_only)), render_seed(&a, None));
}

#[test]
fn chain_data_drives_seed() {
    let e1 = EntropyContext::from_input(&EntropyInput::default().with_block_height(100));
    let e2 = EntropyContext::from_input(&EntropyInput::default().with_block_height(101));
    let a = TraitDescriptor::default();
    let b = TraitDescriptor {
        category: Category::Cyber,
        ..TraitDescriptor::default()
    };
    assert_ne!(render_seed(&a, Some(&e1)), render_seed(&a, Some(&e2)));
    assert_eq!(render_seed(&a, Some(&e1)), render_seed(&b, Some(&e1)));
}
