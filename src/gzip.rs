use std::io;

/// Inflates a gzip-encoded response body.
#[cfg(feature = "gzip")]
pub fn decode(body: Vec<u8>) -> io::Result<Vec<u8>> {
    use std::io::Read;

    let mut decoder = libflate::gzip::Decoder::new(&body[..])?;
    let mut buf = Vec::with_capacity(body.len() * 4);
    decoder.read_to_end(&mut buf)?;
    Ok(buf)
}

#[cfg(not(feature = "gzip"))]
pub fn decode(_: Vec<u8>) -> io::Result<Vec<u8>> {
    Err(io::Error::new(
        io::ErrorKind::InvalidData,
        "received a gzip-encoded body without the `gzip` feature",
    ))
}

/// Whether gzip-encoded responses can be decoded.
pub const ENABLED: bool = cfg!(feature = "gzip");

#[cfg(all(test, feature = "gzip"))]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn inflate() {
        let mut encoder = libflate::gzip::Encoder::new(Vec::new()).unwrap();
        encoder.write_all(br#"{"id":1}"#).unwrap();
        let body = encoder.finish().into_result().unwrap();

        assert_eq!(decode(body).unwrap(), br#"{"id":1}"#);
    }

    #[test]
    fn corrupt_body() {
        assert!(decode(b"not gzip".to_vec()).is_err());
    }
}
