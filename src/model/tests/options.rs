use crate::assert_err;
use crate::model::{DEFAULT_FILE_MODE, MAX_PATH_LEN, Model, ModelError, ModelIoOptions};

#[test]
fn test_default_options() {
    let options = ModelIoOptions::default();
    assert_eq!(options.max_path_len, MAX_PATH_LEN);
    assert_eq!(options.file_mode, DEFAULT_FILE_MODE);
    assert!(options.check_symmetry_on_load);
}

#[test]
fn test_options_from_json() {
    let options = ModelIoOptions::from_json(r#"{"file_mode": 384}"#).unwrap();
    assert_eq!(options.file_mode, 0o600);
    assert_eq!(options.max_path_len, MAX_PATH_LEN);

    assert_eq!(ModelIoOptions::from_json("{}").unwrap(), ModelIoOptions::default());
    assert_err!(
        ModelIoOptions::from_json(r#"{"file_mod": 384}"#),
        ModelError::Config(_)
    );
    assert_err!(ModelIoOptions::from_json("[1, 2]"), ModelError::Config(_));
}

#[test]
fn test_model_metadata() {
    let mut model = Model::new("m", "2.1");
    assert_eq!(model.name(), "m");
    assert_eq!(model.memory_size(), None);
    model.set_weight_size(64);
    model.set_event_num(1);
    model.set_label_num(10);
    assert_eq!(model.weight_size(), Some(64));
    assert_eq!(model.event_num(), Some(1));
    assert_eq!(model.label_num(), Some(10));
    assert_eq!(model.attrs().len(), 3);
}
