//! The `EXT_framebuffer_sRGB` family: the core GL extension plus its GLX
//! and WGL configuration counterparts. Note that all three define a
//! `FRAMEBUFFER_SRGB_CAPABLE_EXT` constant, each with its own value.

use crate::descriptor::{Api, ExtensionDescriptor};
use crate::registry::{Registry, RegistryError};

pub(super) fn register(registry: &mut Registry) -> Result<(), RegistryError> {
  registry.register(
    ExtensionDescriptor::builder(Api::Gl, "EXT_framebuffer_sRGB")
      .doc(
        "Conventionally, OpenGL assumes framebuffer color components are stored in a linear \
         color space. In particular, framebuffer blending is a linear operation.\n\
         \n\
         The sRGB color space is based on typical (non-linear) monitor characteristics expected \
         in a dimly lit office. It has been standardized by the International Electrotechnical \
         Commission (IEC) as IEC 61966-2-1. The sRGB color space roughly corresponds to 2.2 \
         gamma correction.\n\
         \n\
         This extension adds a framebuffer capability for sRGB framebuffer update and blending. \
         When blending is disabled but the new sRGB updated mode is enabled (assume the \
         framebuffer supports the capability), high-precision linear color component values for \
         red, green, and blue generated by fragment coloring are encoded for sRGB prior to being \
         written into the framebuffer. When blending is enabled along with the new sRGB update \
         mode, red, green, and blue framebuffer color components are treated as sRGB values that \
         are converted to linear color values, blended with the high-precision color values \
         generated by fragment coloring, and then the blend result is encoded for sRGB just \
         prior to being written into the framebuffer.\n\
         \n\
         The primary motivation for this extension is that it allows OpenGL applications to \
         render into a framebuffer that is scanned to a monitor configured to assume framebuffer \
         color values are sRGB encoded. This assumption is roughly true of most PC monitors with \
         default gamma correction. This allows applications to achieve faithful color \
         reproduction for OpenGL rendering without adjusting the monitor's gamma correction.\n\
         \n\
         Promoted to core in OpenGL 3.0.",
      )
      .constant(
        "Accepted by the cap parameter of Enable, Disable, and IsEnabled, and by the pname \
         parameter of GetBooleanv, GetIntegerv, GetFloatv, and GetDoublev.",
        "FRAMEBUFFER_SRGB_EXT",
        0x8DB9,
      )
      .constant(
        "Accepted by the pname parameter of GetBooleanv, GetIntegerv, GetFloatv, and GetDoublev.",
        "FRAMEBUFFER_SRGB_CAPABLE_EXT",
        0x8DBA,
      )
      .build()?,
  )?;

  registry.register(
    ExtensionDescriptor::builder(Api::Glx, "GLX_EXT_framebuffer_sRGB")
      .doc("GLX functionality for {@link EXT_framebuffer_sRGB}.")
      .constant(
        "Accepted by the attribList parameter of glXChooseVisual, and by the attrib parameter \
         of glXGetConfig.",
        "FRAMEBUFFER_SRGB_CAPABLE_EXT",
        0x20B2,
      )
      .build()?,
  )?;

  registry.register(
    ExtensionDescriptor::builder(Api::Wgl, "WGL_EXT_framebuffer_sRGB")
      .doc(
        "WGL functionality for {@link EXT_framebuffer_sRGB}.\n\
         \n\
         Requires WGL_EXT_extensions_string and WGL_ARB_pixel_format.",
      )
      .constant(
        "Accepted by the piAttributes parameter of wglGetPixelFormatAttribivEXT, \
         wglGetPixelFormatAttribfvEXT, and the piAttribIList and pfAttribIList of \
         wglChoosePixelFormatEXT.",
        "FRAMEBUFFER_SRGB_CAPABLE_EXT",
        0x20A9,
      )
      .build()?,
  )?;

  Ok(())
}
