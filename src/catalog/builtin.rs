//! The course catalog shipped with coursebook.

use super::{Course, CourseId, Subcourse};

pub(super) fn courses() -> Vec<Course> {
    vec![
        course(CourseId::Python, "Python", &PYTHON),
        course(CourseId::JavaScript, "JavaScript", &JAVA_SCRIPT),
        course(CourseId::React, "React", &REACT),
        course(CourseId::TypeScript, "TypeScript", &TYPE_SCRIPT),
        course(CourseId::Vue, "Vue", &VUE),
        course(CourseId::CSharp, "C#", &C_SHARP),
        course(CourseId::Cpp, "C++", &CPP),
        course(CourseId::Go, "Go", &GO),
        course(CourseId::Angular, "Angular", &ANGULAR),
        course(CourseId::Html, "HTML", &HTML),
        course(CourseId::Css, "CSS", &CSS),
        course(CourseId::NextJs, "Next.js", &NEXT_JS),
        course(CourseId::Java, "Java", &JAVA),
        course(CourseId::Php, "PHP", &PHP),
        course(CourseId::Ruby, "Ruby", &RUBY),
        course(CourseId::TailwindCss, "TailwindCSS", &TAILWIND_CSS),
        course(CourseId::Bootstrap, "Bootstrap", &BOOTSTRAP),
    ]
}

fn course(id: CourseId, title: &'static str, subcourses: &'static [Subcourse]) -> Course {
    Course {
        id,
        title,
        subcourses,
    }
}

static PYTHON: [Subcourse; 14] = [
    Subcourse::new("Introduction to Python", "python/IntroductionPython"),
    Subcourse::new("Get Started with Python", "python/GetStartedPython"),
    Subcourse::new("Python Variables and Data Types", "python/VariablesPython"),
    Subcourse::new("Python Operators and Comparison", "python/OperatorPython"),
    Subcourse::new("Python Conditions", "python/ConditionPython"),
    Subcourse::new("Python Loops", "python/LoopsPython"),
    Subcourse::new("Python Strings", "python/StringPython"),
    Subcourse::new("Python Lists", "python/ListPython"),
    Subcourse::new("Python Dictionary", "python/DictPython"),
    Subcourse::new("Python Sets", "python/SetPython"),
    Subcourse::new("File Handling in Python", "python/FileHandlingPython"),
    Subcourse::new("Python Functions", "python/FunctionsPython"),
    Subcourse::new("Python Object-Oriented Programming", "python/OOPPython"),
    Subcourse::new("Working with Modules in Python", "python/ModulesPython"),
];

static JAVA_SCRIPT: [Subcourse; 12] = [
    Subcourse::new("Introduction to JavaScript", "javascript/IntroductionJavascript"),
    Subcourse::new("JavaScript Variables and Data Types", "javascript/VariablesJavascript"),
    Subcourse::new("JavaScript Operators", "javascript/OperatorsJavascript"),
    Subcourse::new("JavaScript Conditions", "javascript/ConditionsJavascript"),
    Subcourse::new("JavaScript Loops", "javascript/LoopsJavascript"),
    Subcourse::new("JavaScript Functions", "javascript/FunctionsJavascript"),
    Subcourse::new("JavaScript Arrays", "javascript/ArraysJavascript"),
    Subcourse::new("JavaScript Objects", "javascript/ObjectsJavascript"),
    Subcourse::new("JavaScript DOM Manipulation", "javascript/DOMManipulation"),
    Subcourse::new("JavaScript Events", "javascript/EventsJavascript"),
    Subcourse::new("JavaScript ES6 and Beyond", "javascript/ES6Javascript"),
    Subcourse::new("Async JavaScript and Promises", "javascript/AsyncPromises"),
];

static REACT: [Subcourse; 19] = [
    Subcourse::new("Introduction to React", "react/IntroductionReact"),
    Subcourse::new("Get Started with React", "react/GetStartedReact"),
    Subcourse::new("JSX Basics", "react/JSXBasic"),
    Subcourse::new("Components and Props", "react/ComponentsProps"),
    Subcourse::new("Using React Hooks", "react/UsingHooks"),
    Subcourse::new("useState and State Management", "react/useStateHook"),
    Subcourse::new("useEffect Hook", "react/useEffectHook"),
    Subcourse::new("React Router Basics", "react/ReactRouterBasics"),
    Subcourse::new("Advanced Routing", "react/AdvancedRouting"),
    Subcourse::new("Rendering Lists in React", "react/RenderingList"),
    Subcourse::new("Using Keys in Lists", "react/KeysInList"),
    Subcourse::new("Handling Forms in React", "react/HandlingForm"),
    Subcourse::new("Form Validation", "react/FormValidation"),
    Subcourse::new("Fetching Data from APIs", "react/FetchingData"),
    Subcourse::new("Working with Axios", "react/AxiosIntro"),
    Subcourse::new("Context API", "react/ContextAPI"),
    Subcourse::new("Introduction to Redux", "react/ReduxIntro"),
    Subcourse::new("Performance Optimization", "react/PerformanceOptimization"),
    Subcourse::new("Deploying React Applications", "react/DeployingReact"),
];

static TYPE_SCRIPT: [Subcourse; 7] = [
    Subcourse::new("Introduction to TypeScript", "typescript/IntroductionTypescript"),
    Subcourse::new("TypeScript Basics", "typescript/BasicsTypescript"),
    Subcourse::new("Working with Types", "typescript/TypesTypescript"),
    Subcourse::new("TypeScript Classes and Interfaces", "typescript/ClassesInterfacesTypescript"),
    Subcourse::new("TypeScript Generics", "typescript/GenericsTypescript"),
    Subcourse::new("Advanced TypeScript Features", "typescript/AdvancedTypescript"),
    Subcourse::new("TypeScript Interoperability", "typescript/InteropTypescript"),
];

static VUE: [Subcourse; 9] = [
    Subcourse::new("Introduction to Vue.js", "vue/IntroductionVue"),
    Subcourse::new("Get Started with Vue", "vue/GetStartedVue"),
    Subcourse::new("Vue Components and Props", "vue/ComponentsProps"),
    Subcourse::new("Vue Directives", "vue/Directives"),
    Subcourse::new("Vue Event Handling", "vue/EventHandling"),
    Subcourse::new("Vue Router Basics", "vue/VueRouter"),
    Subcourse::new("Vuex for State Management", "vue/VuexStateManagement"),
    Subcourse::new("Working with APIs in Vue", "vue/ApiIntegration"),
    Subcourse::new("Deploying Vue Applications", "vue/DeployingVue"),
];

static C_SHARP: [Subcourse; 11] = [
    Subcourse::new("Introduction to C#", "csharp/IntroductionCSharp"),
    Subcourse::new("C# Basics: Variables and Data Types", "csharp/BasicsCSharp"),
    Subcourse::new("C# Control Structures", "csharp/ControlStructuresCSharp"),
    Subcourse::new("C# Methods", "csharp/MethodsCSharp"),
    Subcourse::new("C# Object-Oriented Programming", "csharp/OOPCSharp"),
    Subcourse::new("C# Collections", "csharp/CollectionsCSharp"),
    Subcourse::new("LINQ in C#", "csharp/LINQCSharp"),
    Subcourse::new("Exception Handling in C#", "csharp/ExceptionHandlingCSharp"),
    Subcourse::new("Asynchronous Programming in C#", "csharp/AsyncProgrammingCSharp"),
    Subcourse::new("Delegates and Events", "csharp/DelegatesEventsCSharp"),
    Subcourse::new("C# Generics", "csharp/GenericsCSharp"),
];

static CPP: [Subcourse; 11] = [
    Subcourse::new("Introduction to C++", "cplusplus/IntroductionCPlusPlus"),
    Subcourse::new("C++ Basics: Variables and Data Types", "cplusplus/BasicsCPlusPlus"),
    Subcourse::new("C++ Control Structures", "cplusplus/ControlStructuresCPlusPlus"),
    Subcourse::new("C++ Functions", "cplusplus/FunctionsCPlusPlus"),
    Subcourse::new("Object-Oriented Programming in C++", "cplusplus/OOPCPlusPlus"),
    Subcourse::new("C++ Standard Library", "cplusplus/StandardLibraryCPlusPlus"),
    Subcourse::new("Pointers and References", "cplusplus/PointersReferencesCPlusPlus"),
    Subcourse::new("C++ Templates", "cplusplus/TemplatesCPlusPlus"),
    Subcourse::new("Memory Management in C++", "cplusplus/MemoryManagementCPlusPlus"),
    Subcourse::new("Advanced C++ Features", "cplusplus/AdvancedCPlusPlus"),
    Subcourse::new("C++ Concurrency", "cplusplus/ConcurrencyCPlusPlus"),
];

static GO: [Subcourse; 11] = [
    Subcourse::new("Introduction to Go", "go/IntroductionGo"),
    Subcourse::new("Go Basics: Variables and Data Types", "go/BasicsGo"),
    Subcourse::new("Go Control Structures", "go/ControlStructuresGo"),
    Subcourse::new("Go Functions", "go/FunctionsGo"),
    Subcourse::new("Go Structs and Interfaces", "go/StructsInterfacesGo"),
    Subcourse::new("Go Concurrency", "go/ConcurrencyGo"),
    Subcourse::new("Error Handling in Go", "go/ErrorHandlingGo"),
    Subcourse::new("Working with Packages in Go", "go/PackagesGo"),
    Subcourse::new("Building Web Applications with Go", "go/WebAppsGo"),
    Subcourse::new("Testing in Go", "go/TestingGo"),
    Subcourse::new("Deploying Go Applications", "go/DeployingGo"),
];

static ANGULAR: [Subcourse; 12] = [
    Subcourse::new("Introduction to Angular", "angular/IntroductionAngular"),
    Subcourse::new("Get Started with Angular", "angular/GetStartedAngular"),
    Subcourse::new("Angular Components and Modules", "angular/ComponentsModulesAngular"),
    Subcourse::new("Angular Templates and Data Binding", "angular/TemplatesDataBindingAngular"),
    Subcourse::new("Angular Services", "angular/ServicesAngular"),
    Subcourse::new("Angular Routing", "angular/RoutingAngular"),
    Subcourse::new("Angular Forms", "angular/FormsAngular"),
    Subcourse::new("Dependency Injection in Angular", "angular/DependencyInjectionAngular"),
    Subcourse::new("Angular HTTPClient", "angular/HTTPClientAngular"),
    Subcourse::new("Angular State Management with NgRx", "angular/StateManagementNgRx"),
    Subcourse::new("Angular Performance Optimization", "angular/PerformanceOptimizationAngular"),
    Subcourse::new("Building Angular Applications", "angular/DeployingAngular"),
];

static HTML: [Subcourse; 9] = [
    Subcourse::new("Introduction to HTML", "html/IntroductionHTML"),
    Subcourse::new("HTML Elements and Structure", "html/ElementsStructureHTML"),
    Subcourse::new("HTML Forms and Inputs", "html/FormsInputsHTML"),
    Subcourse::new("HTML Media Elements", "html/MediaElementsHTML"),
    Subcourse::new("Semantic HTML", "html/SemanticHTML"),
    Subcourse::new("Accessibility in HTML", "html/AccessibilityHTML"),
    Subcourse::new("HTML5 Features", "html/HTML5Features"),
    Subcourse::new("SEO Best Practices with HTML", "html/SEOBestPracticesHTML"),
    Subcourse::new("Advanced HTML Techniques", "html/AdvancedHTML"),
];

static CSS: [Subcourse; 11] = [
    Subcourse::new("Introduction to CSS", "css/IntroductionCSS"),
    Subcourse::new("CSS Selectors and Specificity", "css/SelectorsSpecificityCSS"),
    Subcourse::new("CSS Box Model", "css/BoxModelCSS"),
    Subcourse::new("CSS Layouts with Flexbox", "css/FlexboxCSS"),
    Subcourse::new("CSS Grid Layout", "css/GridLayoutCSS"),
    Subcourse::new("Responsive Design with CSS", "css/ResponsiveDesignCSS"),
    Subcourse::new("CSS Animations and Transitions", "css/AnimationsTransitionsCSS"),
    Subcourse::new("CSS Preprocessors: Sass and LESS", "css/PreprocessorsCSS"),
    Subcourse::new("Advanced CSS Techniques", "css/AdvancedCSS"),
    Subcourse::new("CSS Architecture: BEM and OOCSS", "css/ArchitectureCSS"),
    Subcourse::new("CSS Performance Optimization", "css/PerformanceOptimizationCSS"),
];

static NEXT_JS: [Subcourse; 12] = [
    Subcourse::new("Introduction to Next.js", "nextjs/IntroductionNextJS"),
    Subcourse::new("Setting Up a Next.js Project", "nextjs/SettingUpNextJS"),
    Subcourse::new("Pages and Routing in Next.js", "nextjs/PagesRoutingNextJS"),
    Subcourse::new("Next.js Components and Props", "nextjs/ComponentsPropsNextJS"),
    Subcourse::new("Next.js Data Fetching", "nextjs/DataFetchingNextJS"),
    Subcourse::new("API Routes in Next.js", "nextjs/APIRoutesNextJS"),
    Subcourse::new("Styling in Next.js", "nextjs/StylingNextJS"),
    Subcourse::new("Deploying Next.js Applications", "nextjs/DeployingNextJS"),
    Subcourse::new("Next.js Dynamic Routing", "nextjs/DynamicRoutingNextJS"),
    Subcourse::new("Authentication in Next.js", "nextjs/AuthenticationNextJS"),
    Subcourse::new("Next.js Performance Optimization", "nextjs/PerformanceOptimizationNextJS"),
    Subcourse::new("Building Serverless Functions with Next.js", "nextjs/ServerlessFunctionsNextJS"),
];

static JAVA: [Subcourse; 1] = [
    Subcourse::new("Introduction to Java", "java/IntroductionJava"),
];

static PHP: [Subcourse; 1] = [
    Subcourse::new("Introduction to PHP", "php/IntroductionPHP"),
];

static RUBY: [Subcourse; 1] = [
    Subcourse::new("Introduction to Ruby", "ruby/IntroductionRuby"),
];

static TAILWIND_CSS: [Subcourse; 1] = [
    Subcourse::new("Introduction to TailwindCSS", "tailwind/IntroductionTailwind"),
];

static BOOTSTRAP: [Subcourse; 1] = [
    Subcourse::new("Introduction to Bootstrap", "bootstrap/IntroductionBootstrap"),
];
