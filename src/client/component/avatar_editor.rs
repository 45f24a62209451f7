//! Upload, crop, and compress a custom avatar.
//!
//! The picked file is checked before it is read, previewed at a size that fits the
//! editor, and cropped with a square selection that the user drags and resizes.
//! Saving rasterizes the crop to 256x256 JPEG under the byte budget and uploads the
//! data URL; the backend verifies it again before storing it.

use dioxus::prelude::*;

use crate::{
    avatar::{
        crop::{CropRegion, Dimensions, MIN_CROP_SIZE},
        upload::ACCEPT_ATTRIBUTE,
    },
    client::component::{Banner, FullScreenModal},
    model::user::UserDto,
};

#[cfg(feature = "web")]
use crate::{
    avatar::{
        compress::{process_upload, CompressOptions},
        data_url::encode_data_url,
        upload::validate_upload,
    },
    client::api::profile::update_avatar,
};
#[cfg(feature = "web")]
use dioxus_logger::tracing;
#[cfg(feature = "web")]
use gloo_timers::future::TimeoutFuture;

/// Longest edge of the crop preview, in CSS pixels.
const PREVIEW_EDGE: f64 = 480.0;

/// File picked for cropping, kept until the editor saves or closes.
#[derive(Clone, Debug, PartialEq)]
struct SelectedImage {
    bytes: Vec<u8>,
    mime: String,
    preview_url: String,
    displayed: Dimensions,
}

#[cfg(feature = "web")]
impl SelectedImage {
    fn load(bytes: Vec<u8>, mime: String) -> Result<Self, String> {
        let natural = image::ImageReader::new(std::io::Cursor::new(&bytes))
            .with_guessed_format()
            .map_err(|e| e.to_string())?
            .into_dimensions()
            .map_err(|e| format!("Could not read image: {}", e))?;

        Ok(Self {
            preview_url: encode_data_url(&mime, &bytes),
            displayed: Dimensions::fit_within(natural, PREVIEW_EDGE),
            bytes,
            mime,
        })
    }
}

/// What Save compresses, captured when the button is clicked.
#[cfg(any(feature = "web", test))]
#[derive(Clone, Debug, PartialEq)]
struct SaveJob {
    image: SelectedImage,
    crop: CropRegion,
}

#[cfg(any(feature = "web", test))]
impl SaveJob {
    /// No job while a save is still running or before a file is picked.
    fn start(selected: Option<SelectedImage>, crop: CropRegion, saving: bool) -> Option<Self> {
        if saving {
            return None;
        }
        selected.map(|image| Self { image, crop })
    }
}

#[component]
pub fn AvatarEditor(mut banner: Signal<Option<Banner>>, on_saved: EventHandler<UserDto>) -> Element {
    let mut selected = use_signal(|| None::<SelectedImage>);
    let mut crop = use_signal(|| CropRegion {
        x: 0.0,
        y: 0.0,
        size: MIN_CROP_SIZE,
    });
    let mut show_editor = use_signal(|| false);
    let mut is_saving = use_signal(|| false);

    // Drop the file when the editor closes so a reopened picker starts fresh
    use_effect(move || {
        if !show_editor() {
            selected.set(None);
        }
    });

    let on_file = move |evt: FormEvent| async move {
        #[cfg(feature = "web")]
        {
            let Some(file) = evt.files().into_iter().next() else {
                return;
            };
            let mime = file.content_type().unwrap_or_default();

            if let Err(err) = validate_upload(&mime, file.size()) {
                banner.set(Some(Banner::error(err.to_string())));
                return;
            }

            let bytes = match file.read_bytes().await {
                Ok(bytes) => bytes.to_vec(),
                Err(err) => {
                    tracing::error!("Failed to read avatar upload: {}", err);
                    banner.set(Some(Banner::error("Could not read the selected file.")));
                    return;
                }
            };

            match SelectedImage::load(bytes, mime) {
                Ok(image) => {
                    crop.set(CropRegion::centered(image.displayed));
                    selected.set(Some(image));
                    show_editor.set(true);
                }
                Err(message) => banner.set(Some(Banner::error(message))),
            }
        }
        #[cfg(not(feature = "web"))]
        let _ = evt;
    };

    let on_save = move |_| {
        #[cfg(feature = "web")]
        {
            let Some(job) = SaveJob::start(selected(), crop(), is_saving()) else {
                return;
            };
            is_saving.set(true);

            spawn(async move {
                // Let the spinner render before the blocking decode and encode
                TimeoutFuture::new(0).await;

                let result = match process_upload(
                    &job.image.bytes,
                    &job.image.mime,
                    job.crop,
                    job.image.displayed,
                    &CompressOptions::default(),
                ) {
                    Ok(avatar) => update_avatar(avatar.to_data_url())
                        .await
                        .map_err(|err| err.message),
                    Err(err) => Err(err.to_string()),
                };

                match result {
                    Ok(user) => {
                        on_saved.call(user);
                        banner.set(Some(Banner::success("Avatar updated.")));
                        show_editor.set(false);
                    }
                    Err(message) => {
                        tracing::error!("Failed to save avatar: {}", message);
                        banner.set(Some(Banner::error(message)));
                    }
                }
                is_saving.set(false);
            });
        }
    };

    let saving = is_saving();

    rsx! {
        label {
            class: "btn btn-outline",
            "Upload avatar"
            input {
                r#type: "file",
                class: "hidden",
                accept: ACCEPT_ATTRIBUTE,
                onchange: on_file,
            }
        }

        FullScreenModal {
            show: show_editor,
            title: "Crop avatar".to_string(),
            prevent_close: saving,
            if let Some(image) = selected() {
                CropArea { image, crop }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        disabled: saving,
                        onclick: move |_| show_editor.set(false),
                        "Cancel"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-primary",
                        disabled: saving,
                        onclick: on_save,
                        if saving {
                            span { class: "loading loading-spinner loading-sm mr-2" }
                            "Saving..."
                        } else {
                            "Save"
                        }
                    }
                }
            }
        }
    }
}

/// Preview with the draggable square and a size slider.
#[component]
fn CropArea(image: SelectedImage, mut crop: Signal<CropRegion>) -> Element {
    let mut drag_from = use_signal(|| None::<(f64, f64)>);
    let bounds = image.displayed;
    let region = crop();
    let max_size = bounds.shorter_side();

    rsx! {
        div {
            class: "flex flex-col items-center gap-4",
            div {
                class: "relative select-none touch-none",
                style: "width: {bounds.width}px; height: {bounds.height}px;",
                onpointermove: move |evt| {
                    if let Some((last_x, last_y)) = drag_from() {
                        let point = evt.client_coordinates();
                        crop.set(crop().moved_by(point.x - last_x, point.y - last_y, bounds));
                        drag_from.set(Some((point.x, point.y)));
                    }
                },
                onpointerup: move |_| drag_from.set(None),
                onpointerleave: move |_| drag_from.set(None),
                img {
                    src: "{image.preview_url}",
                    draggable: false,
                    width: "{bounds.width}",
                    height: "{bounds.height}",
                    class: "block pointer-events-none",
                }
                div {
                    class: "absolute border-2 border-primary cursor-move shadow-[0_0_0_9999px_rgba(0,0,0,0.5)]",
                    style: "left: {region.x}px; top: {region.y}px; width: {region.size}px; height: {region.size}px;",
                    onpointerdown: move |evt| {
                        let point = evt.client_coordinates();
                        drag_from.set(Some((point.x, point.y)));
                    },
                }
            }
            label {
                class: "flex items-center gap-3 w-full max-w-md",
                span { class: "text-sm", "Size" }
                input {
                    r#type: "range",
                    class: "range range-sm flex-1",
                    min: "{MIN_CROP_SIZE.min(max_size)}",
                    max: "{max_size}",
                    step: "1",
                    value: "{region.size}",
                    oninput: move |evt| {
                        if let Some(size) = evt.value().parse::<f64>().ok().filter(|size| size.is_finite()) {
                            crop.set(crop().resized(size, bounds));
                        }
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picked() -> SelectedImage {
        SelectedImage {
            bytes: vec![0xFF, 0xD8],
            mime: "image/jpeg".to_string(),
            preview_url: "data:image/jpeg;base64,/9g=".to_string(),
            displayed: Dimensions::new(400.0, 300.0),
        }
    }

    #[test]
    fn save_captures_image_and_crop() {
        let crop = CropRegion::centered(Dimensions::new(400.0, 300.0));

        let job = SaveJob::start(Some(picked()), crop, false).unwrap();

        assert_eq!(job.image, picked());
        assert_eq!(job.crop, crop);
    }

    #[test]
    fn second_click_while_saving_starts_nothing() {
        let crop = CropRegion::centered(Dimensions::new(400.0, 300.0));

        assert!(SaveJob::start(Some(picked()), crop, true).is_none());
    }

    #[test]
    fn save_without_a_file_starts_nothing() {
        let crop = CropRegion::centered(Dimensions::new(400.0, 300.0));

        assert!(SaveJob::start(None, crop, false).is_none());
    }
}
