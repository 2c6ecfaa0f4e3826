/// Issues opaque access tokens.
pub trait TokenGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// 32 random bytes, hex encoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTokenGenerator;

impl TokenGenerator for RandomTokenGenerator {
    fn generate(&self) -> String {
        let bytes: [u8; 32] = rand::random();

        hex::encode(bytes)
    }
}
