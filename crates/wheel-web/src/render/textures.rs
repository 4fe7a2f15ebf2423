//! Floor roughness/normal maps loaded from image URLs.
//!
//! A failed load is not fatal: the floor falls back to a flat 1x1 texel.

use super::helpers;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Texture plus its view; the texture is held so the view stays backed.
pub(crate) struct LoadedMap {
    _texture: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
}

pub(crate) struct FloorMaps {
    pub(crate) roughness: LoadedMap,
    pub(crate) normal: LoadedMap,
}

pub(crate) async fn load_floor_maps(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    roughness_url: &str,
    normal_url: &str,
) -> FloorMaps {
    // mid-gray roughness, flat +Z normal
    let roughness = load_or_fallback(device, queue, roughness_url, [128, 128, 128, 255]).await;
    let normal = load_or_fallback(device, queue, normal_url, [128, 128, 255, 255]).await;
    FloorMaps { roughness, normal }
}

async fn load_or_fallback(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    url: &str,
    fallback: [u8; 4],
) -> LoadedMap {
    match load_image(url).await {
        Ok(img) => upload_image(device, queue, url, &img),
        Err(e) => {
            log::warn!("[textures] {} unavailable, using flat fallback: {:?}", url, e);
            solid_texel(device, queue, url, fallback)
        }
    }
}

async fn load_image(url: &str) -> anyhow::Result<web::HtmlImageElement> {
    let document = web::window()
        .and_then(|w| w.document())
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let img: web::HtmlImageElement = document
        .create_element("img")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    img.set_cross_origin(Some("anonymous"));
    img.set_src(url);
    JsFuture::from(img.decode())
        .await
        .map_err(|e| anyhow::anyhow!("decode {}: {:?}", url, e))?;
    if img.natural_width() == 0 || img.natural_height() == 0 {
        anyhow::bail!("{} decoded to an empty image", url);
    }
    Ok(img)
}

fn upload_image(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    img: &web::HtmlImageElement,
) -> LoadedMap {
    let width = img.natural_width();
    let height = img.natural_height();
    let (tex, view) = helpers::create_color_texture_device(
        device,
        label,
        width,
        height,
        wgpu::TextureFormat::Rgba8Unorm,
        wgpu::TextureUsages::TEXTURE_BINDING
            | wgpu::TextureUsages::COPY_DST
            | wgpu::TextureUsages::RENDER_ATTACHMENT,
    );
    queue.copy_external_image_to_texture(
        &wgpu::CopyExternalImageSourceInfo {
            source: wgpu::ExternalImageSource::HTMLImageElement(img.clone()),
            origin: wgpu::Origin2d::ZERO,
            flip_y: false,
        },
        wgpu::CopyExternalImageDestInfo {
            texture: &tex,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
            color_space: wgpu::PredefinedColorSpace::Srgb,
            premultiplied_alpha: false,
        },
        wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
    );
    log::info!("[textures] loaded {} ({}x{})", label, width, height);
    LoadedMap {
        _texture: tex,
        view,
    }
}

fn solid_texel(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    rgba: [u8; 4],
) -> LoadedMap {
    let (tex, view) = helpers::create_color_texture_device(
        device,
        label,
        1,
        1,
        wgpu::TextureFormat::Rgba8Unorm,
        wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
    );
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &tex,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &rgba,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4),
            rows_per_image: Some(1),
        },
        wgpu::Extent3d {
            width: 1,
            height: 1,
            depth_or_array_layers: 1,
        },
    );
    LoadedMap {
        _texture: tex,
        view,
    }
}
