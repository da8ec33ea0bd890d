// the class names the interaction layer toggles; each maps onto one declaration
pub const UTILITIES: &str = r#"
.hidden { display: none !important; }
.py-2 { padding-top: 0.5rem; padding-bottom: 0.5rem; }
.py-4 { padding-top: 1rem; padding-bottom: 1rem; }
.shadow-xl { box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04); }

.transition-colors { transition-property: color, background-color, border-color; }
.duration-500 { transition-duration: 500ms; }

.bg-gradient { background-image: linear-gradient(to right, var(--gradient-from), var(--gradient-to)); }
.from-primary\/90 { --gradient-from: rgba(185, 28, 28, 0.9); }
.to-red-600\/90 { --gradient-to: rgba(220, 38, 38, 0.9); }
.to-red-700\/90 { --gradient-to: rgba(185, 28, 28, 0.9); }
.from-gray-800\/95 { --gradient-from: rgba(31, 41, 55, 0.95); }
.to-gray-900\/95 { --gradient-to: rgba(17, 24, 39, 0.95); }

.bg-indigo-600\/20 { background-color: rgba(79, 70, 229, 0.2); }
.bg-yellow-400\/20 { background-color: rgba(250, 204, 21, 0.2); }

.bg-primary\/80 { background-color: rgba(185, 28, 28, 0.8); }
.bg-accent\/80 { background-color: rgba(29, 78, 216, 0.8); }
.bg-secondary\/80 { background-color: rgba(202, 138, 4, 0.8); }

.border-green-500\/50 { border-color: rgba(34, 197, 94, 0.5); }
.border-red-500 { border-color: #EF4444; }
.bg-red-50\/30 { background-color: rgba(254, 242, 242, 0.3); }
"#;
