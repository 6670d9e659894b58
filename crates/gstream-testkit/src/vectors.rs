//! Golden test vectors for deterministic verification.
//!
//! These vectors pin the observable output of every stream the workspace
//! defines, so that any implementation can be checked against them.

use serde::Serialize;

use gstream_core::{
    Gqs1Stream, IntegrityError, Output, SeedRegistry, StreamGenerator, GOLDEN_RATIO_SEED,
};
use gstream_pqc::{derive_seed, PqcAlgorithm};

/// A golden stream vector.
#[derive(Debug, Clone, Serialize)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Registry name of the seed.
    pub seed_name: &'static str,
    /// Expected SHA-256 of the seed (hex).
    pub checksum: &'static str,
    /// Blocks discarded before the expected outputs begin.
    pub skip: u64,
    /// Expected outputs (hex), in order.
    pub expected: &'static [&'static str],
}

/// A derived-seed vector.
#[derive(Debug, Clone, Serialize)]
pub struct PqcVector {
    pub name: &'static str,
    pub algorithm: PqcAlgorithm,
    pub context: &'static str,
    /// Input block (hex).
    pub block: &'static str,
    /// Expected derived seed (hex).
    pub expected: &'static str,
}

const GOLDEN_RATIO_CHECKSUM_HEX: &str =
    "096412ca0482ab0f519bc0e4ded667475c45495047653a21aa11e2c7c578fa6f";

/// The published GQS-1 vectors for the reference seed.
pub const GQS1_VECTORS: [&str; 10] = [
    "a01611f01e8207a27c1529c3650c4838",
    "255a98839109b593c97580ce561471d7",
    "f9e3d43664f3192b84d90f58ee584d83",
    "96424e78558928d84ce6caff9c0db6b6",
    "b3cf328d72fabeefea0dd08e03ecf916",
    "f28408d2d0346064dcaba3e12af9be41",
    "2814128f48ec28a58ecb252c061a15f9",
    "12b4c98b607be0fc17d8466b2dc8fa8d",
    "f77e98348d239044998b668b312f70ed",
    "017e9869c72a529f25f8dcf1fa869b98",
];

/// Get all golden stream vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "reference stream, first ten blocks",
            seed_name: "golden-ratio",
            checksum: GOLDEN_RATIO_CHECKSUM_HEX,
            skip: 0,
            expected: &[
                "3c732e0d04dac163a5cc2b15c7caf42c",
                "edfe2173c2dcfec9a8897a79aabb5eea",
                "7dff6f432b80ba096d5e3ec630e38fa9",
                "3bc0ec5894dbb7033178a1b0e94f982b",
                "6691951f7fb46c8b27de8cd7008f9519",
                "7c6e6a4504b6216c9f5e35d57c9a4cfd",
                "27bf60e8cda1316b1b70d26738fade1d",
                "87b02c1f6c435088de9ff3263435bc94",
                "c211399de600612c56796b855ba61fc6",
                "327bf3d1fc0e2bed66b29e1a9911930f",
            ],
        },
        GoldenVector {
            name: "reference stream, block 100",
            seed_name: "golden-ratio",
            checksum: GOLDEN_RATIO_CHECKSUM_HEX,
            skip: 99,
            expected: &["45d3436f92f322de3712f963fd6b2868"],
        },
        GoldenVector {
            name: "reference stream, block 1000",
            seed_name: "golden-ratio",
            checksum: GOLDEN_RATIO_CHECKSUM_HEX,
            skip: 999,
            expected: &["ee630edb163e580f549689444450777c"],
        },
        GoldenVector {
            name: "pi stream",
            seed_name: "pi",
            checksum: "3dac418c56279e7f6edfa334a6091d4a2d1269b7fb564033de12af732de62869",
            skip: 0,
            expected: &[
                "21e7a8682c751e928f814ce032ef3660",
                "ccbdd7f7689cf5aac23efaf58c4d007d",
                "1f5d4722aee1616c68250ed092e3d335",
            ],
        },
        GoldenVector {
            name: "e stream",
            seed_name: "e",
            checksum: "5f829e81be2aca03ad8818eb9574f699d1e6f044ca1d95b5282ff43778ce5dd1",
            skip: 0,
            expected: &[
                "373236f247a72b5bf8b096d07d2073c7",
                "63bbda04574423d53774c01c900024cb",
                "5304b0e88f5362f26a2f0e1859d3d946",
            ],
        },
        GoldenVector {
            name: "sqrt2 stream",
            seed_name: "sqrt2",
            checksum: "9e586dcce4adf45d899bec82e999a0b9b048b77faf6a03216f33524f83b130c7",
            skip: 0,
            expected: &[
                "3471a3df573f0229ba8e91593da47e65",
                "e6763b1e8cdb687403d0e8a2ca0f566b",
                "91ba7347537e2bce537d483560a8f667",
            ],
        },
    ]
}

/// Get all derived-seed vectors. Every input block is the first reference
/// output.
pub fn pqc_vectors() -> Vec<PqcVector> {
    const FIRST_BLOCK: &str = "3c732e0d04dac163a5cc2b15c7caf42c";
    vec![
        PqcVector {
            name: "Kyber-768 keygen",
            algorithm: PqcAlgorithm::Kyber768,
            context: "KEYGEN",
            block: FIRST_BLOCK,
            expected: "cfe5394b25c2d69cf0288fd2eb4d67c2de0a12cabfe7c08d958ea6a89233b2e0",
        },
        PqcVector {
            name: "Dilithium3, first stream item",
            algorithm: PqcAlgorithm::Dilithium3,
            context: "0",
            block: FIRST_BLOCK,
            expected: "cc81ea1198c86e561bff2681bf53adc10f9cddfc60a9e30b4328c29c72d7e479",
        },
        PqcVector {
            name: "SPHINCS+-128f, 48-byte seed",
            algorithm: PqcAlgorithm::SphincsPlus128f,
            context: "",
            block: FIRST_BLOCK,
            expected: "7232e4e6c939b74866ce38b41abee9b2db68831825ed2153c3211f1973a556e1\
                       556d89e80295503ec55009766f23d593",
        },
        PqcVector {
            name: "SPHINCS+-256f, 64-byte seed",
            algorithm: PqcAlgorithm::SphincsPlus256f,
            context: "",
            block: FIRST_BLOCK,
            expected: "7cabc7738ba633df380c136bb873d543cc094c34df066daca2b7546c9dbce835\
                       3b75178be9f97f0e97a6550f091dc819f719bf14ce546524befe6920aa699209",
        },
    ]
}

/// Run the stream a vector describes and return the outputs it checks.
pub fn generate_outputs(vector: &GoldenVector) -> Result<Vec<Output>, IntegrityError> {
    let registry = SeedRegistry::builtin();
    let mut generator = StreamGenerator::from_registry(&registry, vector.seed_name)?;
    generator.skip_blocks(vector.skip);
    Ok(generator.take(vector.expected.len()).collect())
}

/// Verify all golden stream vectors.
///
/// Returns `(name, matches, actual outputs)` for each vector.
pub fn verify_all_vectors() -> Vec<(String, bool, Vec<String>)> {
    let registry = SeedRegistry::builtin();
    all_vectors()
        .iter()
        .map(|v| {
            let checksum_ok = registry
                .get(v.seed_name)
                .map(|entry| entry.checksum.to_hex() == v.checksum)
                .unwrap_or(false);
            let actual: Vec<String> = generate_outputs(v)
                .map(|outs| outs.iter().map(Output::to_hex).collect())
                .unwrap_or_default();
            let matches = checksum_ok && actual == v.expected;
            (v.name.to_string(), matches, actual)
        })
        .collect()
}

/// Verify the GQS-1 vectors. Returns the index of the first mismatch.
pub fn verify_gqs1_vectors() -> Result<(), usize> {
    let stream = Gqs1Stream::new(&GOLDEN_RATIO_SEED).map_err(|_| 0usize)?;
    for (i, (got, expected)) in stream.zip(GQS1_VECTORS).enumerate() {
        if got.to_hex() != expected {
            return Err(i);
        }
    }
    Ok(())
}

/// Verify all derived-seed vectors. Returns the names of failing vectors.
pub fn verify_pqc_vectors() -> Vec<&'static str> {
    pqc_vectors()
        .into_iter()
        .filter(|v| {
            let seed = Output::from_hex(v.block)
                .map(|block| hex::encode(derive_seed(&block, v.algorithm, v.context.as_bytes())));
            seed.map_or(true, |s| s != v.expected)
        })
        .map(|v| v.name)
        .collect()
}

/// All vectors as one JSON document, for other implementations to consume.
pub fn vectors_json() -> serde_json::Result<String> {
    #[derive(Serialize)]
    struct VectorFile {
        version: &'static str,
        streams: Vec<GoldenVector>,
        gqs1: [&'static str; 10],
        pqc: Vec<PqcVector>,
    }

    serde_json::to_string_pretty(&VectorFile {
        version: env!("CARGO_PKG_VERSION"),
        streams: all_vectors(),
        gqs1: GQS1_VECTORS,
        pqc: pqc_vectors(),
    })
}
