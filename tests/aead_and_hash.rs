//! Integration tests against the public facade only: `hash`, `encrypt`, `decrypt`, their
//! allocation-free `_mut` counterparts, and the fixed length constants. Vector-pinned
//! known-answer tests live alongside the code they pin in `src/xoodyak.rs`; these exercise the
//! properties that hold for any input.

use xoodyak::xoodyak::{decrypt, decrypt_mut, encrypt, encrypt_mut, hash, DIGEST_LEN, KEY_LEN, NONCE_LEN};

#[test]
fn hash_of_empty_message_is_deterministic() {
    assert_eq!(hash(b""), hash(b""));
}

#[test]
fn hash_determinism_and_distinctness() {
    assert_eq!(hash(b"same input"), hash(b"same input"));
    assert_ne!(hash(b"input one"), hash(b"input two"));
}

#[test]
fn aead_round_trip_various_lengths() {
    let key = [0x11u8; KEY_LEN];
    let nonce = [0x22u8; NONCE_LEN];

    for ad_len in [0, 1, 6, 64] {
        for pt_len in [0, 1, 23, 24, 25, 64] {
            let ad: Vec<u8> = (0..ad_len).map(|i| i as u8).collect();
            let pt: Vec<u8> = (0..pt_len).map(|i| (i * 3 + 1) as u8).collect();

            let (ct, tag) = encrypt(&key, &nonce, &ad, &pt);
            assert_eq!(ct.len(), pt.len());

            let (pt_p, ok) = decrypt(&key, &nonce, &tag, &ad, &ct);
            assert!(ok, "ad_len={ad_len} pt_len={pt_len}");
            assert_eq!(pt_p, pt);
        }
    }
}

#[test]
fn bit_flip_in_tag_rejects_and_zeroes_plaintext() {
    let key = [0x33u8; KEY_LEN];
    let nonce = [0x44u8; NONCE_LEN];
    let ad = b"associated data";
    let pt = b"the eagle flies at midnight".to_vec();

    let (ct, mut tag) = encrypt(&key, &nonce, ad, &pt);
    tag[0] ^= 0x01;

    let (pt_p, ok) = decrypt(&key, &nonce, &tag, ad, &ct);
    assert!(!ok);
    assert!(pt_p.iter().all(|&b| b == 0));
    assert_eq!(pt_p.len(), pt.len());
}

#[test]
fn bit_flip_in_key_nonce_ad_or_ciphertext_rejects() {
    let key = [0x55u8; KEY_LEN];
    let nonce = [0x66u8; NONCE_LEN];
    let ad = b"ad".to_vec();
    let pt = b"payload".to_vec();
    let (ct, tag) = encrypt(&key, &nonce, &ad, &pt);

    let mut bad_key = key;
    bad_key[0] ^= 0x01;
    assert!(!decrypt(&bad_key, &nonce, &tag, &ad, &ct).1);

    let mut bad_nonce = nonce;
    bad_nonce[0] ^= 0x01;
    assert!(!decrypt(&key, &bad_nonce, &tag, &ad, &ct).1);

    let mut bad_ad = ad.clone();
    bad_ad[0] ^= 0x01;
    assert!(!decrypt(&key, &nonce, &tag, &bad_ad, &ct).1);

    let mut bad_ct = ct.clone();
    bad_ct[0] ^= 0x01;
    assert!(!decrypt(&key, &nonce, &tag, &ad, &bad_ct).1);
}

#[test]
fn empty_ad_and_empty_ciphertext_round_trip() {
    let key = [0x77u8; KEY_LEN];
    let nonce = [0x88u8; NONCE_LEN];

    let (ct, tag) = encrypt(&key, &nonce, b"", b"");
    assert!(ct.is_empty());
    let (pt, ok) = decrypt(&key, &nonce, &tag, b"", &ct);
    assert!(ok);
    assert!(pt.is_empty());

    let (ct, tag) = encrypt(&key, &nonce, b"some ad", b"");
    let (pt, ok) = decrypt(&key, &nonce, &tag, b"some ad", &ct);
    assert!(ok);
    assert!(pt.is_empty());
}

#[test]
fn mut_entry_points_match_allocating_wrappers() {
    let key = [0x99u8; KEY_LEN];
    let nonce = [0xaau8; NONCE_LEN];
    let ad = b"context";
    let pt = b"the quick brown fox".to_vec();

    let (ct, tag) = encrypt(&key, &nonce, ad, &pt);

    let mut buf = pt.clone();
    let tag_mut = encrypt_mut(&key, &nonce, ad, &mut buf);
    assert_eq!(buf, ct);
    assert_eq!(tag_mut, tag);

    let mut buf = ct.clone();
    let ok = decrypt_mut(&key, &nonce, &tag, ad, &mut buf);
    assert!(ok);
    assert_eq!(buf, pt);

    let mut bad_tag = tag;
    bad_tag[0] ^= 0x01;
    let mut buf = ct;
    let ok = decrypt_mut(&key, &nonce, &bad_tag, ad, &mut buf);
    assert!(!ok);
    assert!(buf.iter().all(|&b| b == 0));
}

#[test]
fn parallel_hash_matches_sequential() {
    let messages: Vec<Vec<u8>> =
        (0..64).map(|i| (0..1024).map(|j| (i * 7 + j) as u8).collect()).collect();

    let sequential: Vec<[u8; DIGEST_LEN]> = messages.iter().map(|m| hash(m)).collect();

    let parallel: Vec<[u8; DIGEST_LEN]> = std::thread::scope(|scope| {
        let handles: Vec<_> = messages.iter().map(|m| scope.spawn(|| hash(m))).collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
}
