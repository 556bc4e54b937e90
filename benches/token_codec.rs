//! Token codec performance benchmarks
//!
//! Benchmarks minting and verification across claim counts and payload
//! sizes, plus the cost of the common rejection paths.

use chrono::Duration;
use claimseal::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

/// Helper to generate claims maps and pre-signed tokens
mod helpers {
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use claimseal::Claims;
    use hmac::{Hmac, Mac};
    use serde_json::json;
    use sha2::Sha256;

    pub fn claims_with_keys(count: usize) -> Claims {
        let mut claims = Claims::new();
        for index in 0..count {
            claims.insert(format!("claim_{}", index), json!(format!("value_{}", index)));
        }
        claims
    }

    pub fn token_with_payload_size(secret: &[u8], payload_size: usize) -> String {
        let header = r#"{"alg":"HS256","typ":"JWT"}"#;

        let mut payload = r#"{"sub":"user123","expiry":"2999-01-01T00:00:00Z""#.to_string();
        let padding = payload_size.saturating_sub(payload.len() + 11);
        if padding > 0 {
            payload.push_str(",\"data\":\"");
            payload.push_str(&"x".repeat(padding));
            payload.push_str("\"}");
        } else {
            payload.push('}');
        }

        let signing_input = format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(header),
            URL_SAFE_NO_PAD.encode(&payload)
        );

        let mut mac = Hmac::<Sha256>::new_from_slice(secret).unwrap();
        mac.update(signing_input.as_bytes());
        let signature_b64 = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        format!("{}.{}", signing_input, signature_b64)
    }
}

fn bench_create_by_claim_count(c: &mut Criterion) {
    use helpers::claims_with_keys;

    let secret = b"bench-secret-key";
    let counts = vec![1, 10, 100];

    let mut group = c.benchmark_group("create_by_claim_count");

    for count in counts {
        let claims = claims_with_keys(count);

        group.bench_function(format!("claims_{}", count), |b| {
            b.iter(|| {
                let _ = create(black_box(&claims), Duration::hours(1), black_box(secret));
            });
        });
    }

    group.finish();
}

fn bench_verify_by_size(c: &mut Criterion) {
    use helpers::token_with_payload_size;

    let secret = b"bench-secret-key";
    let sizes = vec![64, 256, 1024, 4096, 16384];

    let mut group = c.benchmark_group("verify_by_size");

    for size in sizes {
        let token = token_with_payload_size(secret, size);
        group.throughput(Throughput::Bytes(token.len() as u64));

        group.bench_function(format!("size_{}", size), |b| {
            b.iter(|| {
                let _ = verify_and_decode(black_box(&token), black_box(secret));
            });
        });
    }

    group.finish();
}

fn bench_rejection_paths(c: &mut Criterion) {
    use helpers::token_with_payload_size;

    let secret = b"bench-secret-key";
    let mut group = c.benchmark_group("verify_rejections");

    // Wrong secret, full signature computation before the mismatch
    group.bench_function("wrong_secret", |b| {
        let token = token_with_payload_size(secret, 256);
        b.iter(|| {
            let _ = verify_and_decode(black_box(&token), b"other-secret-key");
        });
    });

    // Structural rejection, no crypto involved
    group.bench_function("missing_segments", |b| {
        let invalid = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9";
        b.iter(|| {
            let _ = verify_and_decode(black_box(invalid), secret);
        });
    });

    // Algorithm gate fires before any signature work
    group.bench_function("unsigned_header", |b| {
        let token = {
            use base64::engine::general_purpose::URL_SAFE_NO_PAD;
            use base64::Engine;
            format!(
                "{}.{}.",
                URL_SAFE_NO_PAD.encode(r#"{"alg":"none","typ":"JWT"}"#),
                URL_SAFE_NO_PAD.encode(r#"{"sub":"user123"}"#)
            )
        };
        b.iter(|| {
            let _ = verify_and_decode(black_box(&token), secret);
        });
    });

    // Signature passes, expiry check rejects
    group.bench_function("expired", |b| {
        let token = create(&Claims::new(), Duration::hours(-1), secret).unwrap();
        b.iter(|| {
            let _ = verify_and_decode(black_box(&token), secret);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_create_by_claim_count,
    bench_verify_by_size,
    bench_rejection_paths
);
criterion_main!(benches);
