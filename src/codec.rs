use crate::buffer::PixelBuffer;
use crate::error::StegoError;
use crate::frame::{self, Frame, LENGTH_HEADER_BITS};
use crate::result::Result;

/// The 1 bit per sample least significant bit codec.
///
/// Both operations are pure. [`LsbCodec::encode`] never touches the
/// carrier it is given and hands back a fresh buffer of the same shape,
/// [`LsbCodec::decode`] only reads. There is no state to share, so
/// concurrent calls on independent buffers need no coordination.
pub struct LsbCodec;

impl LsbCodec {
    /// Embeds `payload` into a copy of `carrier`.
    ///
    /// The framed payload claims the least significant bit of the first
    /// `32 + 8 * chars` samples; every other bit of every sample stays
    /// exactly as it was.
    pub fn encode(carrier: &PixelBuffer, payload: &str) -> Result<PixelBuffer> {
        let frame = Frame::new(payload)?;
        frame::validate_capacity(frame.bit_len(), carrier.capacity_bits())?;

        let mut stego = carrier.clone();
        for (sample, bit) in stego.samples_mut().iter_mut().zip(frame.iter_bits()) {
            *sample = (*sample & 0xFE) | bit;
        }

        Ok(stego)
    }

    /// Recovers the payload hidden in `carrier`.
    pub fn decode(carrier: &PixelBuffer) -> Result<String> {
        let samples = carrier.samples();
        if samples.len() < LENGTH_HEADER_BITS {
            return Err(StegoError::BufferTooSmall(samples.len()));
        }

        let length = frame::parse_length_header(samples.iter().map(|s| s & 1))?;
        frame::validate_payload_length(length, carrier.capacity_bits())?;

        let payload_bits: Vec<u8> = samples[LENGTH_HEADER_BITS..LENGTH_HEADER_BITS + length]
            .iter()
            .map(|s| s & 1)
            .collect();

        frame::bits_to_payload(&payload_bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carrier_of(samples: usize) -> PixelBuffer {
        // shape plays no role for the codec, only the sample count does
        PixelBuffer::from_raw(samples as u32, 1, 1, vec![0b1010_1010; samples]).unwrap()
    }

    #[test]
    fn should_round_trip_a_small_payload() {
        let carrier = carrier_of(1000);

        let stego = LsbCodec::encode(&carrier, "hi").unwrap();
        assert_eq!(LsbCodec::decode(&stego).unwrap(), "hi");
    }

    #[test]
    fn should_round_trip_latin_1_payloads() {
        let carrier = carrier_of(1000);
        let payload = "grüße \u{ff}\u{1}";

        let stego = LsbCodec::encode(&carrier, payload).unwrap();
        assert_eq!(LsbCodec::decode(&stego).unwrap(), payload);
    }

    #[test]
    fn should_fill_the_carrier_to_the_last_bit() {
        // 48 bits capacity, "hi" frames to exactly 48 bits
        let carrier = carrier_of(48);

        let stego = LsbCodec::encode(&carrier, "hi").unwrap();
        assert_eq!(LsbCodec::decode(&stego).unwrap(), "hi");
    }

    #[test]
    fn should_reject_a_payload_one_bit_over_capacity() {
        let carrier = carrier_of(47);

        match LsbCodec::encode(&carrier, "hi") {
            Err(StegoError::PayloadTooLarge {
                required: 48,
                capacity: 47,
            }) => (),
            other => panic!("expected PayloadTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn should_reject_the_scenario_payload_on_a_40_sample_carrier() {
        let carrier = carrier_of(40);

        assert!(matches!(
            LsbCodec::encode(&carrier, "hi"),
            Err(StegoError::PayloadTooLarge { .. })
        ));
    }

    #[test]
    fn should_leave_the_carrier_untouched() {
        let carrier = carrier_of(100);
        let pristine = carrier.clone();

        LsbCodec::encode(&carrier, "hi").unwrap();
        assert_eq!(carrier, pristine);
    }

    #[test]
    fn should_only_mutate_the_lsb_of_claimed_samples() {
        let carrier = carrier_of(100);
        let stego = LsbCodec::encode(&carrier, "hi").unwrap();

        let claimed = 32 + 16;
        for (i, (before, after)) in carrier
            .samples()
            .iter()
            .zip(stego.samples().iter())
            .enumerate()
        {
            assert_eq!(
                before & 0xFE,
                after & 0xFE,
                "upper bits of sample {i} changed"
            );
            if i >= claimed {
                assert_eq!(before, after, "sample {i} past the frame changed");
            }
        }
    }

    #[test]
    fn should_fail_decoding_a_carrier_below_header_size() {
        let carrier = carrier_of(31);

        match LsbCodec::decode(&carrier) {
            Err(StegoError::BufferTooSmall(31)) => (),
            other => panic!("expected BufferTooSmall, got {other:?}"),
        }
    }

    #[test]
    fn should_detect_a_corrupted_length_header() {
        let carrier = carrier_of(1000);
        let mut stego = LsbCodec::encode(&carrier, "hi").unwrap();

        // force the announced length over the remaining capacity
        for sample in stego.samples_mut().iter_mut().take(LENGTH_HEADER_BITS) {
            *sample |= 1;
        }

        assert!(matches!(
            LsbCodec::decode(&stego),
            Err(StegoError::CorruptPayload(_))
        ));
    }

    #[test]
    fn should_flag_a_zero_length_header_as_corrupt() {
        // an empty payload encodes, but its header announces zero bits
        let carrier = carrier_of(100);
        let stego = LsbCodec::encode(&carrier, "").unwrap();

        assert!(matches!(
            LsbCodec::decode(&stego),
            Err(StegoError::CorruptPayload(0))
        ));
    }

    #[test]
    fn should_decode_the_same_payload_twice() {
        let carrier = carrier_of(1000);
        let stego = LsbCodec::encode(&carrier, "deja vu").unwrap();

        let first = LsbCodec::decode(&stego).unwrap();
        let second = LsbCodec::decode(&stego).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, "deja vu");
    }
}
