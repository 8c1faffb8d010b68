use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use lcdtag::{
    BatchProcessor, LabelEncoder, LabelLayout, OutputDepth, RasterError, generate_label,
    invert_polarity, map_digits_to_pattern, write_raster_image,
};
use png::{BitDepth, ColorType, Transformations};
use pretty_assertions::assert_eq;

struct Decoded {
    width: u32,
    height: u32,
    bit_depth: BitDepth,
    color_type: ColorType,
    interlaced: bool,
    data: Vec<u8>,
}

fn decode(path: &Path) -> Decoded {
    let mut decoder = png::Decoder::new(BufReader::new(File::open(path).unwrap()));
    decoder.set_transformations(Transformations::IDENTITY);
    let mut reader = decoder.read_info().unwrap();
    let interlaced = reader.info().interlaced;
    let mut data = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut data).unwrap();
    data.truncate(frame.buffer_size());
    Decoded {
        width: frame.width,
        height: frame.height,
        bit_depth: frame.bit_depth,
        color_type: frame.color_type,
        interlaced,
        data,
    }
}

#[test]
fn label_file_has_reference_header_and_row() {
    let dir = tempfile::tempdir().unwrap();
    let path = generate_label("1337", dir.path()).unwrap();
    assert_eq!(path, dir.path().join("1337.png"));

    let png = decode(&path);
    assert_eq!((png.width, png.height), (256, 1));
    assert_eq!(png.bit_depth, BitDepth::One);
    assert_eq!(png.color_type, ColorType::Grayscale);
    assert!(!png.interlaced);

    let mut expected = vec![0u8; 32];
    expected[1..7].copy_from_slice(&map_digits_to_pattern("561337").unwrap());
    assert_eq!(png.data, invert_polarity(&expected));
    // background is white on disk
    assert_eq!(png.data[0], 0xFF);
    assert!(png.data[7..].iter().all(|b| *b == 0xFF));
}

#[test]
fn rewriting_the_same_buffer_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("same.png");
    let mut packed = vec![0u8; 32];
    packed[1..7].copy_from_slice(&[0x77; 6]);

    write_raster_image(&path, 256, 1, &packed).unwrap();
    let first = fs::read(&path).unwrap();
    write_raster_image(&path, 256, 1, &packed).unwrap();
    let second = fs::read(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("0000.png");
    fs::write(&path, b"stale contents that are not a png").unwrap();
    write_raster_image(&path, 256, 1, &[0; 32]).unwrap();
    assert_eq!(decode(&path).width, 256);
}

#[test]
fn missing_directory_is_unwritable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no/such/dir/1337.png");
    let err = write_raster_image(&path, 256, 1, &[0; 32]).unwrap_err();
    assert!(matches!(err, RasterError::DestinationUnwritable { .. }));
    assert!(!path.exists());
}

#[test]
fn short_buffer_never_creates_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.png");
    let err = write_raster_image(&path, 256, 1, &[0; 8]).unwrap_err();
    assert!(matches!(err, RasterError::InvalidGeometry(_)));
    assert!(!path.exists());
}

#[test]
fn batch_run_matches_single_label_output() {
    let dir = tempfile::tempdir().unwrap();
    let single = dir.path().join("single");
    let batch = dir.path().join("batch");
    fs::create_dir(&single).unwrap();

    generate_label("4711", &single).unwrap();
    let report = BatchProcessor::new(LabelEncoder::default(), &batch, OutputDepth::One)
        .run("4711\n4711\n12345\n".lines())
        .unwrap();

    assert_eq!(report.written(), 1);
    assert_eq!(report.duplicates(), 1);
    assert_eq!(report.invalid(), 1);
    assert_eq!(
        fs::read(single.join("4711.png")).unwrap(),
        fs::read(batch.join("4711.png")).unwrap()
    );
}

#[test]
fn eight_bit_export_is_one_byte_per_pixel() {
    let dir = tempfile::tempdir().unwrap();
    let encoder = LabelEncoder::default();
    let label = encoder.encode("9999").unwrap();
    let path = encoder.write(&label, dir.path(), OutputDepth::Eight).unwrap();

    let png = decode(&path);
    assert_eq!(png.bit_depth, BitDepth::Eight);
    assert_eq!(png.color_type, ColorType::Grayscale);
    assert_eq!(png.data.len(), 256);
    for x in 0..256u32 {
        let expected = if label.row.is_lit(x) { 0x00 } else { 0xFF };
        assert_eq!(png.data[x as usize], expected, "pixel {x}");
    }
}

#[test]
fn custom_check_code_parameters_flow_into_the_row() {
    let encoder = LabelEncoder::new(LabelLayout {
        checksum_modulus: 83,
        checksum_len: 3,
        ..LabelLayout::default()
    })
    .unwrap();
    let label = encoder.encode("9999").unwrap();
    // 9999 % 83 = 39
    assert_eq!(label.digits, "0399999");
    assert_eq!(&label.row.as_bytes()[1..8], label.glyphs.as_slice());
}
