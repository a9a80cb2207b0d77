pub trait TranspositionHash {
    fn transposition_hash(&self) -> u64;
}
