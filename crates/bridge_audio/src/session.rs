//! An audio session: the live module graph and its per-sample tick.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::callback::{ExportedCallback, ModuleInstance};
use crate::config::SessionConfig;
use crate::error::AudioError;
use crate::field::{Control, FieldDecl, FieldRole, find_field};
use crate::graph::{Connection, evaluation_order};
use crate::host::AudioHost;
use crate::module::{Module, ModuleContext, ModuleId};
use crate::registry::ModuleRegistry;

/// Owns every module instance of one audio graph.
///
/// The graph is built with [`AudioSession::instantiate`] and
/// [`AudioSession::connect`], then driven with [`AudioSession::tick`]. Wiring
/// is sealed by the first tick.
pub struct AudioSession {
    config: SessionConfig,
    host: Arc<dyn AudioHost>,
    registry: ModuleRegistry,
    modules: BTreeMap<ModuleId, ModuleInstance>,
    connections: Vec<Connection>,
    order: Vec<ModuleId>,
    next_id: u64,
    samples: u64,
}

impl AudioSession {
    #[must_use]
    pub fn new(config: SessionConfig, host: Arc<dyn AudioHost>, registry: ModuleRegistry) -> Self {
        info!(
            session = %config.name,
            module_types = registry.len(),
            "audio session created"
        );
        Self {
            config,
            host,
            registry,
            modules: BTreeMap::new(),
            connections: Vec::new(),
            order: Vec::new(),
            next_id: 1,
            samples: 0,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Construct a module by type name and export its update routine.
    ///
    /// # Errors
    ///
    /// [`AudioError::UnknownModuleType`] if no constructor is registered,
    /// [`AudioError::GraphSealed`] once the session has started ticking.
    pub fn instantiate(&mut self, type_name: &str) -> Result<ModuleId, AudioError> {
        self.ensure_unsealed()?;

        let id = ModuleId(self.next_id);
        let ctx = ModuleContext::new(id, self.host.clone());
        let Some(module) = self.registry.create(type_name, ctx) else {
            warn!(type_name, "unknown module type");
            return Err(AudioError::UnknownModuleType(type_name.to_string()));
        };
        self.next_id += 1;

        let instance = ModuleInstance::new(id, module);
        if instance.callback().is_null() {
            debug!(module = %id, type_name, "module has no update routine");
        }
        let controls = instance.module().controls().len();
        info!(module = %id, type_name, controls, "module instantiated");

        self.modules.insert(id, instance);
        self.order.push(id);
        self.order.sort_unstable();
        self.order = evaluation_order(&self.order, &self.connections)?;
        Ok(id)
    }

    /// Wire an Output field of `from` to an Input field of `to`.
    ///
    /// # Errors
    ///
    /// Fails on unknown modules or fields, on fields with the wrong role, on
    /// a connection that would form a cycle, and once the graph is sealed.
    pub fn connect(
        &mut self,
        from: ModuleId,
        from_field: &str,
        to: ModuleId,
        to_field: &str,
    ) -> Result<(), AudioError> {
        self.ensure_unsealed()?;

        let source = self.field_decl(from, from_field)?;
        if source.role != FieldRole::Output {
            return Err(AudioError::FieldRole {
                module: from,
                field: from_field.to_string(),
                expected: "output",
            });
        }
        let target = self.field_decl(to, to_field)?;
        if target.role != FieldRole::Input {
            return Err(AudioError::FieldRole {
                module: to,
                field: to_field.to_string(),
                expected: "input",
            });
        }

        self.connections.push(Connection {
            from,
            from_field: source.name,
            to,
            to_field: target.name,
        });
        match evaluation_order(&self.modules.keys().copied().collect::<Vec<_>>(), &self.connections) {
            Ok(order) => {
                self.order = order;
                debug!(%from, from_field, %to, to_field, "modules connected");
                Ok(())
            }
            Err(err) => {
                self.connections.pop();
                error!(%from, %to, %err, "rejected connection");
                Err(err)
            }
        }
    }

    /// The exported update routine of a module. Null when it has none.
    ///
    /// # Errors
    ///
    /// [`AudioError::UnknownModule`] if `id` is not in this session.
    pub fn update_method(&self, id: ModuleId) -> Result<ExportedCallback, AudioError> {
        self.instance(id).map(ModuleInstance::callback)
    }

    /// Read-only access to a module.
    #[must_use]
    pub fn module(&self, id: ModuleId) -> Option<&dyn Module> {
        self.modules.get(&id).map(ModuleInstance::module)
    }

    /// Current value of any declared field.
    ///
    /// # Errors
    ///
    /// Fails on an unknown module or field.
    pub fn field_value(&self, id: ModuleId, name: &str) -> Result<f32, AudioError> {
        self.instance(id)?
            .module()
            .field(name)
            .ok_or_else(|| AudioError::UnknownField {
                module: id,
                field: name.to_string(),
            })
    }

    /// Write an Input field, as the host would before a tick.
    ///
    /// # Errors
    ///
    /// Fails on an unknown module or field, or a field that is not an Input.
    pub fn set_input(&mut self, id: ModuleId, name: &str, value: f32) -> Result<(), AudioError> {
        let decl = self.field_decl(id, name)?;
        if decl.role != FieldRole::Input {
            return Err(AudioError::FieldRole {
                module: id,
                field: name.to_string(),
                expected: "input",
            });
        }
        self.instance_mut(id)?.module_mut().set_field(name, value);
        Ok(())
    }

    /// Every Control field of a module.
    ///
    /// # Errors
    ///
    /// [`AudioError::UnknownModule`] if `id` is not in this session.
    pub fn controls(&self, id: ModuleId) -> Result<Vec<Control>, AudioError> {
        Ok(self.instance(id)?.module().controls())
    }

    /// # Errors
    ///
    /// Fails on an unknown module or field, or a field that is not a Control.
    pub fn control_value(&self, id: ModuleId, name: &str) -> Result<f32, AudioError> {
        self.control_decl(id, name)?;
        self.field_value(id, name)
    }

    /// # Errors
    ///
    /// Fails on an unknown module or field, or a field that is not a Control.
    pub fn set_control(&mut self, id: ModuleId, name: &str, value: f32) -> Result<(), AudioError> {
        self.control_decl(id, name)?;
        self.instance_mut(id)?.module_mut().set_field(name, value);
        debug!(module = %id, control = name, value, "control set");
        Ok(())
    }

    /// Run one sample tick over the whole graph.
    ///
    /// For each module in evaluation order, connected outputs are copied into
    /// its inputs and then its exported callback is invoked. Null callbacks
    /// are skipped. Returns `false` without ticking once `max_samples` is
    /// reached.
    pub fn tick(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }

        for &id in &self.order {
            for connection in self.connections.iter().filter(|c| c.to == id) {
                let value = self
                    .modules
                    .get(&connection.from)
                    .and_then(|source| source.module().field(connection.from_field));
                if let (Some(value), Some(target)) = (value, self.modules.get_mut(&id)) {
                    target.module_mut().set_field(connection.to_field, value);
                }
            }
            if let Some(instance) = self.modules.get_mut(&id) {
                instance.tick();
            }
        }

        self.samples += 1;
        true
    }

    /// Tick until `max_samples` is reached. Returns the number of ticks run.
    ///
    /// An unbounded session runs no ticks here; drive it with
    /// [`AudioSession::tick`] instead.
    pub fn run(&mut self) -> u64 {
        if self.config.max_samples == 0 {
            warn!(session = %self.config.name, "run() on an unbounded session");
            return 0;
        }
        let start = self.samples;
        while self.tick() {}
        let ran = self.samples - start;
        info!(session = %self.config.name, samples = ran, "audio session finished");
        ran
    }

    /// Sample ticks run so far.
    #[must_use]
    pub fn samples(&self) -> u64 {
        self.samples
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.config.max_samples != 0 && self.samples >= self.config.max_samples
    }

    /// Module ids in the order a tick evaluates them.
    #[must_use]
    pub fn evaluation_order(&self) -> &[ModuleId] {
        &self.order
    }

    #[must_use]
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    fn ensure_unsealed(&self) -> Result<(), AudioError> {
        if self.samples > 0 {
            return Err(AudioError::GraphSealed);
        }
        Ok(())
    }

    fn instance(&self, id: ModuleId) -> Result<&ModuleInstance, AudioError> {
        self.modules.get(&id).ok_or(AudioError::UnknownModule(id))
    }

    fn instance_mut(&mut self, id: ModuleId) -> Result<&mut ModuleInstance, AudioError> {
        self.modules.get_mut(&id).ok_or(AudioError::UnknownModule(id))
    }

    fn field_decl(&self, id: ModuleId, name: &str) -> Result<FieldDecl, AudioError> {
        find_field(self.instance(id)?.module().fields(), name).ok_or_else(|| {
            AudioError::UnknownField {
                module: id,
                field: name.to_string(),
            }
        })
    }

    fn control_decl(&self, id: ModuleId, name: &str) -> Result<FieldDecl, AudioError> {
        let decl = self.field_decl(id, name)?;
        if decl.control_kind().is_none() {
            return Err(AudioError::NotAControl {
                module: id,
                field: name.to_string(),
            });
        }
        Ok(decl)
    }
}

impl std::fmt::Debug for AudioSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioSession")
            .field("config", &self.config)
            .field("modules", &self.modules)
            .field("connections", &self.connections)
            .field("samples", &self.samples)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::ControlKind;
    use crate::host::{Frame, RecordingOutput};

    fn session(max_samples: u64) -> (AudioSession, Arc<RecordingOutput>) {
        let host = Arc::new(RecordingOutput::new(44_100, 2));
        let session = AudioSession::new(
            SessionConfig::new("test").with_max_samples(max_samples),
            host.clone(),
            ModuleRegistry::with_builtin(),
        );
        (session, host)
    }

    #[test]
    fn test_oscillator_writes_one_frame_per_tick() {
        let (mut session, host) = session(8);
        session.instantiate("SineOscillatorModule").unwrap();

        assert_eq!(session.run(), 8);
        assert!(!session.tick());

        let frames = host.frames();
        assert_eq!(frames.len(), 8);
        assert_eq!(frames[0], Frame::default());
    }

    #[test]
    fn test_unknown_type() {
        let (mut session, _) = session(0);
        let err = session.instantiate("ReverbModule").unwrap_err();
        assert!(matches!(err, AudioError::UnknownModuleType(name) if name == "ReverbModule"));
        assert!(session.is_empty());
    }

    #[test]
    fn test_null_update_method() {
        let (mut session, _) = session(0);
        let constant = session.instantiate("ConstantModule").unwrap();
        let sine = session.instantiate("SineOscillatorModule").unwrap();

        assert!(session.update_method(constant).unwrap().is_null());
        assert!(!session.update_method(sine).unwrap().is_null());
        assert!(matches!(
            session.update_method(ModuleId(99)),
            Err(AudioError::UnknownModule(ModuleId(99)))
        ));
    }

    #[test]
    fn test_controls() {
        let (mut session, _) = session(0);
        let sine = session.instantiate("SineOscillatorModule").unwrap();

        let controls = session.controls(sine).unwrap();
        assert_eq!(controls.len(), 1);
        assert_eq!(controls[0].kind, ControlKind::Slider);

        session.set_control(sine, "frequency", 220.0).unwrap();
        assert_eq!(session.control_value(sine, "frequency").unwrap(), 220.0);
        assert!(matches!(
            session.set_control(sine, "sine", 1.0),
            Err(AudioError::NotAControl { .. })
        ));
        assert!(matches!(
            session.control_value(sine, "gain"),
            Err(AudioError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_control_change_reaches_update_routine() {
        let (mut session, host) = session(0);
        let sine = session.instantiate("SineOscillatorModule").unwrap();

        assert!(session.tick());
        session.set_control(sine, "frequency", 11_025.0).unwrap();
        assert!(session.tick());
        assert!(session.tick());

        assert_eq!(session.control_value(sine, "frequency").unwrap(), 11_025.0);
        let frames = host.frames();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].left, 0.0);
        // phase 1 at a quarter of the sample rate lands on the sine peak
        assert!((frames[1].left - 0.5).abs() < 1e-6);
        assert!((session.field_value(sine, "sine").unwrap() - frames[2].left).abs() < f32::EPSILON);
    }

    #[test]
    fn test_connected_output_feeds_input() {
        let (mut session, host) = session(2);
        let output = session.instantiate("OutputModule").unwrap();
        let constant = session.instantiate("ConstantModule").unwrap();
        session.set_control(constant, "value", 0.75).unwrap();
        session.connect(constant, "out", output, "left_channel").unwrap();
        session.set_input(output, "right_channel", -0.25).unwrap();

        assert_eq!(session.evaluation_order(), &[constant, output]);
        session.run();

        assert_eq!(
            host.frames(),
            vec![
                Frame {
                    left: 0.75,
                    right: -0.25
                };
                2
            ]
        );
    }

    #[test]
    fn test_connect_validates_roles() {
        let (mut session, _) = session(0);
        let a = session.instantiate("OutputModule").unwrap();
        let b = session.instantiate("OutputModule").unwrap();
        assert!(matches!(
            session.connect(a, "left_channel", b, "left_channel"),
            Err(AudioError::FieldRole { expected: "output", .. })
        ));
        let sine = session.instantiate("SineOscillatorModule").unwrap();
        assert!(matches!(
            session.connect(sine, "sine", b, "frequency"),
            Err(AudioError::UnknownField { .. })
        ));
        assert!(matches!(
            session.connect(sine, "sine", sine, "frequency"),
            Err(AudioError::FieldRole { expected: "input", .. })
        ));
    }

    #[test]
    fn test_graph_sealed_after_first_tick() {
        let (mut session, _) = session(0);
        let sine = session.instantiate("SineOscillatorModule").unwrap();
        let output = session.instantiate("OutputModule").unwrap();
        assert!(session.tick());

        assert!(matches!(
            session.connect(sine, "square", output, "left_channel"),
            Err(AudioError::GraphSealed)
        ));
        assert!(matches!(
            session.instantiate("OutputModule"),
            Err(AudioError::GraphSealed)
        ));
        // Controls stay adjustable.
        session.set_control(sine, "frequency", 880.0).unwrap();
    }

    struct Relay {
        value: f32,
    }

    impl Module for Relay {
        fn type_name(&self) -> &'static str {
            "Relay"
        }

        fn fields(&self) -> &'static [FieldDecl] {
            const FIELDS: &[FieldDecl] = &[FieldDecl::input("in"), FieldDecl::output("out")];
            FIELDS
        }

        fn field(&self, name: &str) -> Option<f32> {
            matches!(name, "in" | "out").then_some(self.value)
        }

        fn set_field(&mut self, name: &str, value: f32) -> bool {
            if name != "in" {
                return false;
            }
            self.value = value;
            true
        }
    }

    #[test]
    fn test_cycle_rejected() {
        let (mut session, _) = session(0);
        session.registry.register("Relay", |_| Box::new(Relay { value: 0.0 }));
        let a = session.instantiate("Relay").unwrap();
        let b = session.instantiate("Relay").unwrap();
        session.connect(a, "out", b, "in").unwrap();

        assert!(matches!(
            session.connect(b, "out", a, "in"),
            Err(AudioError::Cycle(_))
        ));
        assert_eq!(session.connections().len(), 1);
        assert_eq!(session.evaluation_order(), &[a, b]);
    }

    #[test]
    fn test_unbounded_run_is_noop() {
        let (mut session, _) = session(0);
        session.instantiate("SineOscillatorModule").unwrap();
        assert_eq!(session.run(), 0);
        assert!(session.tick());
        assert_eq!(session.samples(), 1);
    }
}
