use anyhow::Result;

#[cfg(feature = "gui")]
mod shaders {
    use anyhow::{bail, Context, Result};
    use glob::glob;
    use std::fs::{read_to_string, write};
    use std::path::PathBuf;

    struct ShaderData {
        src: String,
        src_path: PathBuf,
        spv_path: PathBuf,
        kind: shaderc::ShaderKind,
    }

    impl ShaderData {
        fn load(src_path: PathBuf) -> Result<Self> {
            let extension = src_path
                .extension()
                .context("File has no extension")?
                .to_str()
                .context("Extension cannot be converted to &str")?;
            let kind = match extension {
                "vert" => shaderc::ShaderKind::Vertex,
                "frag" => shaderc::ShaderKind::Fragment,
                _ => bail!("Unsupported shader: {}", src_path.display()),
            };

            let src = read_to_string(&src_path)?;
            let spv_path = src_path.with_extension(format!("{}.spv", extension));

            Ok(Self {
                src,
                src_path,
                spv_path,
                kind,
            })
        }
    }

    pub fn compile() -> Result<()> {
        let mut shader_paths = [glob("./src/**/*.vert")?, glob("./src/**/*.frag")?];

        let shaders = shader_paths
            .iter_mut()
            .flatten()
            .map(|glob_result| ShaderData::load(glob_result?))
            .collect::<Result<Vec<_>>>()?;

        let mut compiler = shaderc::Compiler::new().context("Unable to create shader compiler")?;

        for shader in shaders {
            let name = shader.src_path.display().to_string();
            println!("cargo:rerun-if-changed={}", name);

            let compiled =
                compiler.compile_into_spirv(&shader.src, shader.kind, &name, "main", None)?;
            write(shader.spv_path, compiled.as_binary_u8())?;
        }

        Ok(())
    }
}

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=build.rs");

    #[cfg(feature = "gui")]
    shaders::compile()?;

    Ok(())
}
