//! Basic example demonstrating the mint and verify cycle
//!
//! This example walks through the full lifecycle of a signed claims token:
//! 1. Mint a token from a claims map with `create()`
//! 2. Inspect its wire format (three base64url segments)
//! 3. Verify it with `verify_and_decode()` and read the claims back
//! 4. Watch the common failure modes reject

use chrono::Duration;
use claimseal::*;
use serde_json::json;

fn main() -> Result<()> {
    println!("=== claimseal - Basic Example ===\n");

    let secret = b"your-256-bit-secret-key-here!";

    // Step 1: Mint a token
    println!("Step 1: Minting token...");
    let mut claims = Claims::new();
    claims.insert("sub".to_string(), json!("user123"));
    claims.insert("role".to_string(), json!("admin"));

    let token = create(&claims, Duration::hours(1), secret)?;
    println!("  ✓ Token: {}\n", token);

    // Step 2: Inspect the wire format
    println!("Step 2: Inspecting wire format...");
    let segments: Vec<&str> = token.split('.').collect();
    println!("  ✓ Header segment:    {}", segments[0]);
    println!("  ✓ Payload segment:   {}", segments[1]);
    println!("  ✓ Signature segment: {}\n", segments[2]);

    // Step 3: Verify and read the claims back
    println!("Step 3: Verifying token...");
    let decoded = verify_and_decode(&token, secret)?;
    println!("  ✓ Signature verified");
    println!("  ✓ Subject: {:?}", decoded.get("sub"));
    println!("  ✓ Role: {:?}", decoded.get("role"));
    println!("  ✓ Expires at: {:?}\n", decoded.get(EXPIRY_CLAIM));

    // Step 4: Failure modes
    println!("Step 4: Watching rejections...");

    let wrong_secret = verify_and_decode(&token, b"a-different-secret");
    println!("  → Wrong secret:      {}", wrong_secret.unwrap_err());

    let tampered = format!("{}.{}.{}", segments[0], segments[1], "forged-signature");
    let forged = verify_and_decode(&tampered, secret);
    println!("  → Forged signature:  {}", forged.unwrap_err());

    let stale = create(&claims, Duration::hours(-1), secret)?;
    let expired = verify_and_decode(&stale, secret);
    println!("  → Expired token:     {}", expired.unwrap_err());

    println!("\n✅ Token round trip complete!");

    Ok(())
}
