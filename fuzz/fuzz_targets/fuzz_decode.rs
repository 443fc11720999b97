#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic, whatever the header claims
    let _ = zentga::ImageInfo::from_bytes(data);
    let limits = zentga::Limits {
        max_memory_bytes: Some(64 * 1024 * 1024),
        ..Default::default()
    };
    if let Ok(decoded) = zentga::DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(enough::Unstoppable)
    {
        assert_eq!(
            decoded.pixels().len(),
            decoded.width as usize * decoded.height as usize * 4
        );
    }
});
