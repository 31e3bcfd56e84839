use anyhow::{anyhow, Context};
use futures::executor::block_on;
use log::{error, info};
use std::time::{Duration, Instant};
use winit::{
    dpi::PhysicalSize,
    event::*,
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use imgui::im_str;

mod renderer;
use renderer::GraphicsContext;

use backtrack_maze::scene::{self, Viewport};
use backtrack_maze::{Command, MazeConfig, MazeError, MazeSession, Phase};

pub struct State {
    pub gfx_ctx: GraphicsContext,
    pub session: MazeSession,

    pub fps: u32,
    pub last_tick: Instant,
}

impl State {
    // returns false if event hasn't been fully processed
    fn input(&mut self, event: &WindowEvent) -> Result<bool, MazeError> {
        let command = match event {
            WindowEvent::KeyboardInput {
                input:
                    KeyboardInput {
                        state: ElementState::Pressed,
                        virtual_keycode: Some(key),
                        ..
                    },
                ..
            } => match key {
                VirtualKeyCode::LControl => Command::Reset,
                VirtualKeyCode::Space => Command::StartSolving,
                _ => return Ok(false),
            },
            _ => return Ok(false),
        };

        self.session.handle(command)?;
        Ok(true)
    }

    fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }

    fn update(&mut self) -> Result<(), MazeError> {
        if self.last_tick.elapsed() < self.frame_interval() {
            return Ok(());
        }
        self.last_tick = Instant::now();

        self.session.tick()
    }

    fn render(&mut self, view: &wgpu::TextureView, device: &wgpu::Device, queue: &wgpu::Queue) {
        self.gfx_ctx.start(view, device, queue);

        let size = self.gfx_ctx.size;
        let verts = scene::build(&self.session, Viewport::new(size.width, size.height));

        self.gfx_ctx.draw(&verts, view, device);

        self.gfx_ctx.render(queue);
    }
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Generating => "generating",
        Phase::Generated => "generated, press space to solve",
        Phase::Solving => "solving",
        Phase::Solved => "solved",
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = MazeConfig::default();
    let session = MazeSession::new(config.clone())?;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Maze Generator")
        .with_inner_size(PhysicalSize::new(
            config.display_width,
            config.display_height,
        ))
        .build(&event_loop)?;
    let hidpi_factor = window.scale_factor();

    let instance = wgpu::Instance::new(wgpu::BackendBit::PRIMARY);
    let surface = unsafe { instance.create_surface(&window) };
    let size = window.inner_size();

    let adapter = block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
        power_preference: wgpu::PowerPreference::Default,
        compatible_surface: Some(&surface),
    }))
    .context("no compatible graphics adapter")?;

    let (device, mut queue) = block_on(adapter.request_device(
        &wgpu::DeviceDescriptor {
            features: wgpu::Features::empty(),
            limits: wgpu::Limits::default(),
            shader_validation: true,
        },
        None, // Trace path
    ))
    .map_err(|e| anyhow!("failed to open graphics device: {:?}", e))?;

    let sc_desc = wgpu::SwapChainDescriptor {
        usage: wgpu::TextureUsage::OUTPUT_ATTACHMENT,
        format: wgpu::TextureFormat::Bgra8UnormSrgb,
        width: size.width,
        height: size.height,
        present_mode: wgpu::PresentMode::Fifo,
    };

    let mut swap_chain = device.create_swap_chain(&surface, &sc_desc);

    // Set up dear imgui
    let mut imgui = imgui::Context::create();
    let mut platform = imgui_winit_support::WinitPlatform::init(&mut imgui);
    platform.attach_window(
        imgui.io_mut(),
        &window,
        imgui_winit_support::HiDpiMode::Default,
    );
    imgui.set_ini_filename(None);

    let font_size = (13.0 * hidpi_factor) as f32;
    imgui.io_mut().font_global_scale = (1.0 / hidpi_factor) as f32;

    imgui
        .fonts()
        .add_font(&[imgui::FontSource::DefaultFontData {
            config: Some(imgui::FontConfig {
                oversample_h: 1,
                pixel_snap_h: true,
                size_pixels: font_size,
                ..Default::default()
            }),
        }]);

    let gfx_ctx = block_on(GraphicsContext::new(&window, &device, &sc_desc));
    let mut renderer = imgui_wgpu::Renderer::new(&mut imgui, &device, &mut queue, sc_desc.format);

    let mut state = State {
        gfx_ctx,
        session,
        fps: config.fps,
        last_tick: Instant::now(),
    };

    info!(
        "{}x{} cells, left ctrl resets, space solves",
        state.session.grid().dims.width,
        state.session.grid().dims.height
    );

    let mut last_frame = Instant::now();
    let mut last_cursor = None;

    event_loop.run(move |event, _, control_flow| {
        match event {
            Event::WindowEvent {
                event: WindowEvent::Resized(_),
                ..
            } => {
                let size = window.inner_size();

                let sc_desc = wgpu::SwapChainDescriptor {
                    usage: wgpu::TextureUsage::OUTPUT_ATTACHMENT,
                    format: wgpu::TextureFormat::Bgra8UnormSrgb,
                    width: size.width,
                    height: size.height,
                    present_mode: wgpu::PresentMode::Fifo,
                };

                swap_chain = device.create_swap_chain(&surface, &sc_desc);
                state.gfx_ctx.resize(size);
            }
            Event::RedrawRequested(_) => {
                let delta_s = last_frame.elapsed();
                let now = Instant::now();
                imgui.io_mut().update_delta_time(now - last_frame);
                last_frame = now;

                let frame = match swap_chain.get_current_frame() {
                    Ok(frame) => frame,
                    Err(e) => {
                        error!("dropped frame: {:?}", e);
                        return;
                    }
                };
                if let Err(e) = platform.prepare_frame(imgui.io_mut(), &window) {
                    error!("failed to prepare imgui frame: {}", e);
                    return;
                }
                let ui = imgui.frame();

                let mut reset = false;
                let mut solve = false;
                {
                    let phase = state.session.phase();
                    let depth = state.session.stack_depth();
                    let fps = &mut state.fps;

                    let window = imgui::Window::new(im_str!("Maze Controls"));
                    window
                        .size([300.0, 160.0], imgui::Condition::FirstUseEver)
                        .build(&ui, || {
                            ui.text(im_str!("Frametime: {:?}", delta_s));
                            ui.separator();
                            ui.text(im_str!("Phase: {}", phase_label(phase)));
                            ui.text(im_str!("Stack depth: {}", depth));
                            ui.separator();

                            imgui::Slider::new(im_str!("steps/s"))
                                .range(1..=240)
                                .build(&ui, fps);

                            ui.separator();
                            if ui.button(im_str!("Reset"), [125., 20.]) {
                                reset = true;
                            }
                            ui.same_line(150.);
                            if ui.button(im_str!("Solve"), [125., 20.]) {
                                solve = true;
                            }
                        });
                }

                let mut outcome = Ok(false);
                if reset {
                    outcome = state.session.handle(Command::Reset);
                }
                if solve && outcome.is_ok() {
                    outcome = state.session.handle(Command::StartSolving);
                }
                let outcome = outcome.map(|_| ()).and_then(|_| state.update());
                if let Err(e) = outcome {
                    error!("{}", e);
                    *control_flow = ControlFlow::Exit;
                    return;
                }

                state.render(&frame.output.view, &device, &queue);

                let mut encoder: wgpu::CommandEncoder =
                    device.create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });

                if last_cursor != Some(ui.mouse_cursor()) {
                    last_cursor = Some(ui.mouse_cursor());
                    platform.prepare_render(&ui, &window);
                }

                let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    color_attachments: &[wgpu::RenderPassColorAttachmentDescriptor {
                        attachment: &frame.output.view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: true,
                        },
                    }],
                    depth_stencil_attachment: None,
                });

                if let Err(e) = renderer.render(ui.render(), &queue, &device, &mut rpass) {
                    error!("imgui rendering failed: {:?}", e);
                }

                drop(rpass);

                queue.submit(Some(encoder.finish()));
            }
            Event::MainEventsCleared => {
                // RedrawRequested will only trigger once, unless we manually
                // request it.
                window.request_redraw();
            }
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                let handled = if imgui.io().want_capture_keyboard {
                    Ok(false)
                } else {
                    state.input(event)
                };

                match handled {
                    Ok(true) => {}
                    Ok(false) => match event {
                        WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                        WindowEvent::KeyboardInput {
                            input:
                                KeyboardInput {
                                    state: ElementState::Pressed,
                                    virtual_keycode: Some(VirtualKeyCode::Escape),
                                    ..
                                },
                            ..
                        } => *control_flow = ControlFlow::Exit,
                        WindowEvent::Resized(physical_size) => {
                            state.gfx_ctx.resize(*physical_size);
                        }
                        WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                            // new_inner_size is &&mut so we have to dereference it twice
                            state.gfx_ctx.resize(**new_inner_size);
                        }
                        _ => {}
                    },
                    Err(e) => {
                        error!("{}", e);
                        *control_flow = ControlFlow::Exit;
                    }
                }
            }
            _ => {}
        }
        platform.handle_event(imgui.io_mut(), &window, &event);
    });
}
