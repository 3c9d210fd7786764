use std::fmt::Debug;

use blake2::{Blake2s256, Digest};

pub(crate) type LinkDigest = [u8; 32];

fn finish(hasher: Blake2s256) -> LinkDigest {
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&hasher.finalize());
    digest
}

/// Starting point of a fingerprint hash chain.
pub(crate) fn genesis_digest() -> LinkDigest {
    finish(Blake2s256::new())
}

/// Folds one node, and the edge leaving it if any, into the running digest.
pub(crate) fn link_digest<T: Debug, R: Debug>(
    prev: &LinkDigest,
    data: &T,
    relation: Option<&R>,
) -> LinkDigest {
    let mut hasher = Blake2s256::new();

    hasher.update(prev);
    update_segment(&mut hasher, "node", data);
    if let Some(relation) = relation {
        update_segment(&mut hasher, "edge", relation);
    }

    finish(hasher)
}

/// Length-prefixed so that no `Debug` text can spill into the next segment.
fn update_segment<V: Debug>(hasher: &mut Blake2s256, tag: &str, value: &V) {
    let text = format!("{:?}", value);

    hasher.update(tag.as_bytes());
    hasher.update((text.len() as u64).to_be_bytes());
    hasher.update(text.as_bytes());
}

#[cfg(test)]
pub(crate) fn random_chain(len: usize) -> crate::types::LinkedChain<u32, std::cmp::Ordering> {
    use crate::traits::Chain;
    use rand::Rng;

    let mut rng = rand::thread_rng();
    let mut chain = crate::types::LinkedChain::new();
    if len == 0 {
        return chain;
    }

    let mut prev: u32 = rng.gen_range(0, 1000);
    assert!(chain.start(prev).is_ok());
    for _ in 1..len {
        let next: u32 = rng.gen_range(0, 1000);
        assert!(chain.append(prev.cmp(&next), next).is_ok());
        prev = next;
    }

    chain
}
