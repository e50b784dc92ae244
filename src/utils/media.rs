use base64::prelude::*;
use std::fs;
use std::io;
use std::path::Path;
use uuid::Uuid;

const RECIPE_IMAGE_DIR: &str = "recipes/images";

#[derive(Debug)]
pub struct DecodedImage {
    pub bytes: Vec<u8>,
    pub extension: &'static str,
}

/// Parse a `data:image/<type>;base64,<payload>` string as uploaded by clients.
pub fn decode_data_uri(payload: &str) -> Result<DecodedImage, String> {
    let rest = payload
        .strip_prefix("data:")
        .ok_or_else(|| "Image must be a base64 data URI".to_string())?;

    let (mime, encoded) = rest
        .split_once(";base64,")
        .ok_or_else(|| "Image data URI must be base64 encoded".to_string())?;

    let extension = match mime {
        "image/png" => "png",
        "image/jpeg" | "image/jpg" => "jpg",
        "image/gif" => "gif",
        "image/webp" => "webp",
        other => return Err(format!("Unsupported image type: {}", other)),
    };

    let bytes = BASE64_STANDARD
        .decode(encoded.trim())
        .map_err(|e| format!("Invalid base64 image payload: {}", e))?;

    if bytes.is_empty() {
        return Err("Image payload is empty".to_string());
    }

    Ok(DecodedImage { bytes, extension })
}

/// Write a decoded image under the media root and return its relative path.
pub fn store_recipe_image(media_root: &str, image: &DecodedImage) -> Result<String, io::Error> {
    let dir = Path::new(media_root).join(RECIPE_IMAGE_DIR);
    fs::create_dir_all(&dir)?;

    let file_name = format!("{}.{}", Uuid::new_v4(), image.extension);
    fs::write(dir.join(&file_name), &image.bytes)?;

    Ok(format!("{}/{}", RECIPE_IMAGE_DIR, file_name))
}

/// Best-effort removal of a stored image. Used when a write fails after the
/// file already landed on disk, and when an update replaces the image.
pub fn remove_recipe_image(media_root: &str, relative: &str) {
    let _ = fs::remove_file(Path::new(media_root).join(relative));
}

/// Public URL for a stored image, served under /media.
pub fn image_url(relative: Option<&String>) -> Option<String> {
    relative.map(|path| format!("/media/{}", path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_png_data_uri() {
        let raw = b"not really a png";
        let uri = format!("data:image/png;base64,{}", BASE64_STANDARD.encode(raw));

        let decoded = decode_data_uri(&uri).unwrap();
        assert_eq!(decoded.extension, "png");
        assert_eq!(decoded.bytes, raw);
    }

    #[test]
    fn jpeg_aliases_map_to_jpg() {
        for mime in ["image/jpeg", "image/jpg"] {
            let uri = format!("data:{};base64,{}", mime, BASE64_STANDARD.encode(b"x"));
            assert_eq!(decode_data_uri(&uri).unwrap().extension, "jpg");
        }
    }

    #[test]
    fn rejects_missing_data_prefix() {
        let err = decode_data_uri("image/png;base64,AAAA").unwrap_err();
        assert!(err.contains("data URI"));
    }

    #[test]
    fn rejects_unsupported_mime() {
        let uri = format!("data:image/tiff;base64,{}", BASE64_STANDARD.encode(b"x"));
        let err = decode_data_uri(&uri).unwrap_err();
        assert!(err.contains("Unsupported image type"));
    }

    #[test]
    fn rejects_broken_base64() {
        let err = decode_data_uri("data:image/png;base64,@@@@").unwrap_err();
        assert!(err.contains("Invalid base64"));
    }

    #[test]
    fn stores_and_removes_an_image() {
        let root = std::env::temp_dir().join(format!("media-test-{}", Uuid::new_v4()));
        let image = DecodedImage {
            bytes: b"payload".to_vec(),
            extension: "png",
        };

        let rel = store_recipe_image(root.to_str().unwrap(), &image).unwrap();
        let stored = root.join(&rel);
        assert!(stored.exists());

        remove_recipe_image(root.to_str().unwrap(), &rel);
        assert!(!stored.exists());

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn builds_public_url() {
        let rel = "recipes/images/a.png".to_string();
        assert_eq!(
            image_url(Some(&rel)),
            Some("/media/recipes/images/a.png".to_string())
        );
        assert_eq!(image_url(None), None);
    }
}
